//! Most frequent times of travel.

use serde::Serialize;

use super::aggregate::mode;
use crate::dataset::{RecordSet, Weekday};

/// Most frequent month, weekday and start hour over a filtered record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelTimeStats {
    /// 1..=12.
    pub most_common_month: u32,
    pub most_common_weekday: Weekday,
    /// 0..=23.
    pub most_common_hour: u32,
}

impl TravelTimeStats {
    /// Computes the three modes, or `None` when the set is empty.
    ///
    /// Ties resolve to the smallest value: the earliest month, the earliest
    /// day of the week (Monday first) and the earliest hour.
    #[must_use]
    pub fn compute(set: &RecordSet) -> Option<Self> {
        let records = set.records();
        Some(Self {
            most_common_month: mode(records.iter().map(|record| record.month))?,
            most_common_weekday: mode(records.iter().map(|record| record.weekday))?,
            most_common_hour: mode(records.iter().map(|record| record.start_hour))?,
        })
    }
}

#[cfg(test)]
#[path = "travel_tests.rs"]
mod tests;
