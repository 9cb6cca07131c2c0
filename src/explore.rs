//! Interactive exploration loop.
//!
//! Collects filter criteria from the user, loads and filters the matching
//! dataset, runs the four reporters with per-section timing, then offers
//! raw-record paging and a restart. End of input at any prompt ends the
//! session cleanly with the farewell line.

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::config::Config;
use crate::dataset::{DatasetLoader, PAGE_SIZE, RecordSet, TripRecord};
use crate::error::Result;
use crate::filter::{City, FilterCriteria};
use crate::output::{
    DEMOGRAPHICS_HEADING, DURATION_HEADING, SECTION_SEPARATOR, STATIONS_HEADING, TRAVEL_HEADING,
    TextReportFormatter,
};
use crate::stats::{DemographicsStats, DurationStats, StationStats, TravelTimeStats};

const INVALID_INPUT_MESSAGE: &str = "Looks like you entered an invalid name. Please Try again.";
const CITY_EXAMPLE: &str = "Example of valid input: 'NY' for New York.";
const MONTH_EXAMPLE: &str = "Example of valid input: 'Jan' for January.";
const DAY_EXAMPLE: &str = "Example of valid input: 'Thu' for Thursday.";
const FAREWELL: &str =
    "----Thanks for using our program and hope to serve you again in the future.----";

/// Only an exact `yes` (any casing) counts as an affirmative answer.
fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

/// How a prompt-driven sub-loop handed control back.
enum Flow {
    Completed,
    EndOfInput,
}

/// One interactive session over arbitrary input/output streams.
///
/// Generic over the streams so tests can drive the session with scripted
/// input and capture its output.
pub struct ExploreSession<R, W> {
    input: R,
    output: W,
    config: Config,
    loader: DatasetLoader,
    formatter: TextReportFormatter,
}

impl<R: BufRead, W: Write> ExploreSession<R, W> {
    pub fn new(
        input: R,
        output: W,
        config: Config,
        loader: DatasetLoader,
        formatter: TextReportFormatter,
    ) -> Self {
        Self {
            input,
            output,
            config,
            loader,
            formatter,
        }
    }

    /// Drives the session until the user declines to restart or the input
    /// stream ends.
    ///
    /// A dataset that fails to load is reported and the loop returns to the
    /// prompts with fresh criteria.
    ///
    /// # Errors
    ///
    /// Returns an error only when the output stream itself fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(criteria) = self.prompt_criteria()? else {
                break;
            };

            match self.load_filtered(criteria) {
                Ok(set) => {
                    self.show_reports(&set)?;
                    if matches!(self.offer_samples(&set)?, Flow::EndOfInput) {
                        break;
                    }
                }
                Err(error) => {
                    writeln!(self.output, "{error}")?;
                    continue;
                }
            }

            match self.prompt_restart()? {
                Some(true) => {}
                Some(false) | None => break,
            }
        }
        self.farewell()
    }

    fn load_filtered(&self, criteria: FilterCriteria) -> Result<RecordSet> {
        let path = self.config.data_path(criteria.city);
        let set = self.loader.load(criteria.city, &path)?;
        Ok(set.filter(&criteria))
    }

    /// Collects the (city, month, day) triple, or `None` once input ends.
    fn prompt_criteria(&mut self) -> Result<Option<FilterCriteria>> {
        self.print_welcome()?;

        writeln!(self.output, "Please choose a city to explore its data.")?;
        writeln!(self.output, "Note: enter city initial(s) only.")?;
        writeln!(self.output)?;
        let Some(city) = self.prompt_until(City::from_code, CITY_EXAMPLE)? else {
            return Ok(None);
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Next, Which month would you like to view the statistics of?"
        )?;
        writeln!(self.output, "Note: enter the first three letters.")?;
        writeln!(self.output)?;
        let Some(month) = self.prompt_until(|line| line.parse().ok(), MONTH_EXAMPLE)? else {
            return Ok(None);
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Finally, Which day would you like to view the statistics of?"
        )?;
        writeln!(self.output, "Note: enter the first three letters.")?;
        writeln!(self.output)?;
        let Some(day) = self.prompt_until(|line| line.parse().ok(), DAY_EXAMPLE)? else {
            return Ok(None);
        };

        writeln!(self.output, "{SECTION_SEPARATOR}")?;
        Ok(Some(FilterCriteria::new(city, month, day)))
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;
        writeln!(self.output, "Please note: ")?;
        writeln!(
            self.output,
            "\t-->only data for Washington D.C, Chicago, and New York City is available."
        )?;
        writeln!(
            self.output,
            "\t-->data is available for months January through June."
        )?;
        writeln!(self.output, "\t-->use all if no filter is required.")?;
        Ok(())
    }

    /// Reads lines until `parse` accepts one, printing the retry message and
    /// `example` after each rejected line. `None` once input ends.
    fn prompt_until<T>(
        &mut self,
        parse: impl Fn(&str) -> Option<T>,
        example: &str,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            writeln!(self.output)?;
            writeln!(self.output, "{INVALID_INPUT_MESSAGE}")?;
            writeln!(self.output, "{example}")?;
            writeln!(self.output)?;
        }
    }

    fn show_reports(&mut self, set: &RecordSet) -> Result<()> {
        let sections: [(&str, fn(&RecordSet) -> String); 4] = [
            (TRAVEL_HEADING, travel_section),
            (STATIONS_HEADING, stations_section),
            (DURATION_HEADING, duration_section),
            (DEMOGRAPHICS_HEADING, demographics_section),
        ];
        for (heading, section) in sections {
            self.show_section(heading, section, set)?;
        }
        Ok(())
    }

    /// One reporter: heading, body, elapsed seconds, separator.
    fn show_section(
        &mut self,
        heading: &str,
        section: fn(&RecordSet) -> String,
        set: &RecordSet,
    ) -> Result<()> {
        let started = Instant::now();
        let body = section(set);
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Calculating {}...",
            self.formatter.heading(heading)
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "{body}")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "This took {} seconds.",
            started.elapsed().as_secs_f64()
        )?;
        writeln!(self.output, "{SECTION_SEPARATOR}")?;
        Ok(())
    }

    /// Pages through raw records five at a time while the user keeps
    /// answering `yes`. Exhausting the set prints the end-of-data line and
    /// falls through to the restart prompt.
    fn offer_samples(&mut self, set: &RecordSet) -> Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "Would you like to show a sample of the data?")?;
        let Some(answer) = self.read_line()? else {
            return Ok(Flow::EndOfInput);
        };

        let mut offset = 0;
        let mut wants_more = is_yes(&answer);
        while wants_more {
            let Some(records) = set.page(offset) else {
                writeln!(self.output, "End of data")?;
                break;
            };
            let rows: Vec<_> = records.iter().map(TripRecord::sample_row).collect();
            writeln!(self.output, "{}", TextReportFormatter::sample_body(&rows))?;
            offset += PAGE_SIZE;

            writeln!(self.output)?;
            writeln!(self.output, "Would you like to show more data samples?")?;
            let Some(answer) = self.read_line()? else {
                return Ok(Flow::EndOfInput);
            };
            wants_more = is_yes(&answer);
        }
        Ok(Flow::Completed)
    }

    /// `Some(true)` to restart, `Some(false)` to finish, `None` once input
    /// ends.
    fn prompt_restart(&mut self) -> Result<Option<bool>> {
        writeln!(self.output)?;
        writeln!(self.output, "Would you like to restart? Enter yes or no.")?;
        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        Ok(Some(is_yes(&answer)))
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{FAREWELL}")?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// One trimmed input line, or `None` once the stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

fn travel_section(set: &RecordSet) -> String {
    TextReportFormatter::travel_body(TravelTimeStats::compute(set).as_ref())
}

fn stations_section(set: &RecordSet) -> String {
    TextReportFormatter::stations_body(StationStats::compute(set).as_ref())
}

fn duration_section(set: &RecordSet) -> String {
    TextReportFormatter::duration_body(DurationStats::compute(set).as_ref())
}

fn demographics_section(set: &RecordSet) -> String {
    TextReportFormatter::demographics_body(DemographicsStats::compute(set).as_ref())
}

#[cfg(test)]
#[path = "explore_tests.rs"]
mod tests;
