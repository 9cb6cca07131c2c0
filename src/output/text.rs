use std::fmt::Write;

use super::{ReportDocument, ReportFormatter};
use crate::dataset::{self, SampleRow};
use crate::error::Result;
use crate::stats::{DemographicsStats, DurationStats, StationStats, TravelTimeStats, to_hms};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Separator printed between report sections.
pub const SECTION_SEPARATOR: &str = "----------------------------------------";

/// Line rendered for any reporter whose record set came out empty.
pub const NO_DATA_MESSAGE: &str = "No data matches the selected filters.";

const NO_GENDER_MESSAGE: &str = "No gender data available for the selected city.";
const NO_BIRTH_YEAR_MESSAGE: &str = "No birth date data available for the selected city.";

/// Section headings shared by the one-shot report and the interactive loop.
pub const TRAVEL_HEADING: &str = "The Most Frequent Times of Travel";
pub const STATIONS_HEADING: &str = "The Most Popular Stations and Trip";
pub const DURATION_HEADING: &str = "Trip Duration";
pub const DEMOGRAPHICS_HEADING: &str = "User Stats";

/// 12-hour label for an hour of day.
///
/// The mapping is arithmetic: hour 13 renders as `1 P.M`, hour 0 as `0 A.M`,
/// and noon as `0 P.M`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    if hour >= 12 {
        format!("{} P.M", hour - 12)
    } else {
        format!("{hour} A.M")
    }
}

pub struct TextReportFormatter {
    use_colors: bool,
}

impl TextReportFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    /// Section heading, colorized when colors are enabled.
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::CYAN, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Sentences describing the most frequent times of travel.
    #[must_use]
    pub fn travel_body(stats: Option<&TravelTimeStats>) -> String {
        stats.map_or_else(
            || NO_DATA_MESSAGE.to_string(),
            |stats| {
                format!(
                    "The most common month is {}.\n\n\
                     The most common day is {}.\n\n\
                     The most common start hour is {}.",
                    dataset::month_name(stats.most_common_month),
                    stats.most_common_weekday.name(),
                    hour_label(stats.most_common_hour)
                )
            },
        )
    }

    /// Sentences describing the most popular stations and trip.
    #[must_use]
    pub fn stations_body(stats: Option<&StationStats>) -> String {
        stats.map_or_else(
            || NO_DATA_MESSAGE.to_string(),
            |stats| {
                format!(
                    "Most commonly used starting station is {}.\n\n\
                     Most commonly used ending station is {}.\n\n\
                     Most frequent combination of start and end stations is {} --> {}.",
                    stats.most_common_start,
                    stats.most_common_end,
                    stats.most_common_trip.start,
                    stats.most_common_trip.end
                )
            },
        )
    }

    /// Sentences describing total and mean travel time.
    #[must_use]
    pub fn duration_body(stats: Option<&DurationStats>) -> String {
        stats.map_or_else(
            || NO_DATA_MESSAGE.to_string(),
            |stats| {
                let total = to_hms(stats.total_secs);
                let mean = to_hms(stats.mean_secs);
                format!(
                    "Total travel time is {} hours {} minutes {} seconds.\n\n\
                     Mean travel time is {} hours {} minutes {} seconds.",
                    total.hours, total.minutes, total.seconds, mean.hours, mean.minutes,
                    mean.seconds
                )
            },
        )
    }

    /// User-type, gender and birth-year blocks, each degrading independently
    /// when its column is not available.
    #[must_use]
    pub fn demographics_body(stats: Option<&DemographicsStats>) -> String {
        let Some(stats) = stats else {
            return NO_DATA_MESSAGE.to_string();
        };

        let mut body = String::from("User types:\n");
        for (user_type, count) in &stats.user_types {
            let _ = write!(body, "\n  {user_type}: {count}");
        }

        body.push_str("\n\n");
        match &stats.genders {
            Some(genders) => {
                body.push_str("User genders:\n");
                for (gender, count) in genders {
                    let _ = write!(body, "\n  {gender}: {count}");
                }
            }
            None => body.push_str(NO_GENDER_MESSAGE),
        }

        body.push_str("\n\n");
        match &stats.birth_years {
            Some(years) => {
                let _ = write!(
                    body,
                    "Earliest year of birth: {}.\n\
                     Most recent year of birth: {}.\n\
                     Most common year of birth: {}.",
                    years.earliest, years.most_recent, years.most_common
                );
            }
            None => body.push_str(NO_BIRTH_YEAR_MESSAGE),
        }

        body
    }

    /// One line per sampled record, preceded by a column header.
    #[must_use]
    pub fn sample_body(rows: &[SampleRow]) -> String {
        let mut body = String::from("Trip Duration | Start Station | End Station | User Type | Gender");
        for row in rows {
            let _ = write!(
                body,
                "\n{} | {} | {} | {} | {}",
                row.trip_duration,
                row.start_station,
                row.end_station,
                row.user_type.as_deref().unwrap_or("-"),
                row.gender.as_deref().unwrap_or("-")
            );
        }
        body
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, document: &ReportDocument) -> Result<String> {
        let criteria = &document.criteria;
        let report = &document.report;

        let mut output = String::new();
        let _ = writeln!(
            output,
            "Bikeshare statistics for {} (month: {}, day: {})",
            criteria.city.name(),
            criteria.month.label(),
            criteria.day.label()
        );
        let _ = writeln!(output, "Records: {}", report.record_count);

        let sections = [
            (TRAVEL_HEADING, Self::travel_body(report.travel.as_ref())),
            (
                STATIONS_HEADING,
                Self::stations_body(report.stations.as_ref()),
            ),
            (
                DURATION_HEADING,
                Self::duration_body(report.duration.as_ref()),
            ),
            (
                DEMOGRAPHICS_HEADING,
                Self::demographics_body(report.demographics.as_ref()),
            ),
        ];
        for (heading, body) in sections {
            let _ = writeln!(output, "{SECTION_SEPARATOR}");
            let _ = writeln!(output, "{}", self.heading(heading));
            let _ = writeln!(output, "\n{body}");
        }

        if !document.sample.is_empty() {
            let _ = writeln!(output, "{SECTION_SEPARATOR}");
            let _ = writeln!(output, "{}", self.heading("Sample"));
            let _ = writeln!(output, "\n{}", Self::sample_body(&document.sample));
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
