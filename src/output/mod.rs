mod json;
mod progress;
mod text;

pub use json::JsonReportFormatter;
pub use progress::LoadProgress;
pub use text::{
    ColorMode, DEMOGRAPHICS_HEADING, DURATION_HEADING, NO_DATA_MESSAGE, SECTION_SEPARATOR,
    STATIONS_HEADING, TRAVEL_HEADING, TextReportFormatter, hour_label,
};

use crate::dataset::SampleRow;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::stats::CityReport;

/// Trait for formatting a city report into various output formats.
pub trait ReportFormatter {
    /// Format the report document into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, document: &ReportDocument) -> Result<String>;
}

/// A computed report plus the criteria that produced it and an optional
/// sample of the underlying records.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub criteria: FilterCriteria,
    pub report: CityReport,
    pub sample: Vec<SampleRow>,
}

impl ReportDocument {
    #[must_use]
    pub const fn new(criteria: FilterCriteria, report: CityReport) -> Self {
        Self {
            criteria,
            report,
            sample: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sample(mut self, sample: Vec<SampleRow>) -> Self {
        self.sample = sample;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
