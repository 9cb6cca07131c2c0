use serde::Serialize;

use super::{ReportDocument, ReportFormatter};
use crate::dataset::SampleRow;
use crate::error::Result;
use crate::stats::{DemographicsStats, DurationStats, StationStats, TravelTimeStats};

pub struct JsonReportFormatter;

impl JsonReportFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReportOutput<'a> {
    city: &'static str,
    month: &'static str,
    day: &'static str,
    record_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    travel: Option<&'a TravelTimeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stations: Option<&'a StationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<&'a DurationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    demographics: Option<&'a DemographicsStats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sample: Vec<&'a SampleRow>,
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, document: &ReportDocument) -> Result<String> {
        let report = &document.report;
        let output = JsonReportOutput {
            city: document.criteria.city.name(),
            month: document.criteria.month.label(),
            day: document.criteria.day.label(),
            record_count: report.record_count,
            travel: report.travel.as_ref(),
            stations: report.stations.as_ref(),
            duration: report.duration.as_ref(),
            demographics: report.demographics.as_ref(),
            sample: document.sample.iter().collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
