use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a city's dataset is decoded.
///
/// The spinner is automatically disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct LoadProgress {
    progress_bar: ProgressBar,
}

impl LoadProgress {
    /// Creates a spinner labelled with the city whose dataset is loading.
    ///
    /// # Arguments
    /// * `city` - Display name of the city being loaded
    /// * `quiet` - If true, the spinner is disabled
    ///
    /// The spinner outputs to stderr to avoid interfering with stdout output.
    ///
    /// # Panics
    ///
    /// This function will panic if the spinner template is invalid.
    /// The template is a compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(city: &str, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(city, quiet, is_tty)
    }

    /// Creates a spinner with explicit visibility control.
    ///
    /// This is an internal constructor that allows testing the visible spinner path
    /// even when running in non-TTY environments.
    fn new_with_visibility(city: &str, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner(city)
        };

        Self { progress_bar }
    }

    /// Creates a visible spinner with styling.
    fn create_visible_spinner(city: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Loading {msg} [{pos} records]")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.set_message(city.to_owned());
        pb
    }

    /// Increments the decoded-record counter by 1.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
