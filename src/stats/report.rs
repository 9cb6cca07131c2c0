//! One city's complete statistics report.

use serde::Serialize;

use super::demographics::DemographicsStats;
use super::duration::DurationStats;
use super::stations::StationStats;
use super::travel::TravelTimeStats;
use crate::dataset::RecordSet;

/// All four reporters computed over one filtered record set.
///
/// Each block is `None` when the set is empty, so an empty filter result
/// renders as "no data" rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityReport {
    pub record_count: usize,
    pub travel: Option<TravelTimeStats>,
    pub stations: Option<StationStats>,
    pub duration: Option<DurationStats>,
    pub demographics: Option<DemographicsStats>,
}

impl CityReport {
    #[must_use]
    pub fn compute(set: &RecordSet) -> Self {
        Self {
            record_count: set.len(),
            travel: TravelTimeStats::compute(set),
            stations: StationStats::compute(set),
            duration: DurationStats::compute(set),
            demographics: DemographicsStats::compute(set),
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
