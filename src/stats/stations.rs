//! Most popular stations and trips.

use serde::Serialize;

use super::aggregate::mode;
use crate::dataset::RecordSet;

/// Separator used to build the composite trip key.
///
/// Station names containing this character corrupt the split back into
/// endpoints; that is a known limitation of the composite-key scheme,
/// preserved as-is.
pub const TRIP_KEY_DELIMITER: char = '/';

/// Most frequent start station, end station and trip over a filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start: String,
    pub most_common_end: String,
    pub most_common_trip: TripEndpoints,
}

/// Endpoints of the most frequent trip, recovered from the composite key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripEndpoints {
    pub start: String,
    pub end: String,
}

impl StationStats {
    /// Computes the station modes, or `None` when the set is empty.
    ///
    /// The most frequent trip joins each record's endpoints with
    /// [`TRIP_KEY_DELIMITER`], takes the mode of the composite keys, then
    /// splits at the first delimiter. Lexicographically smallest key wins
    /// ties.
    #[must_use]
    pub fn compute(set: &RecordSet) -> Option<Self> {
        let records = set.records();
        let most_common_start = mode(records.iter().map(|record| record.start_station.clone()))?;
        let most_common_end = mode(records.iter().map(|record| record.end_station.clone()))?;

        let key = mode(records.iter().map(|record| {
            format!(
                "{}{TRIP_KEY_DELIMITER}{}",
                record.start_station, record.end_station
            )
        }))?;
        let (start, end) = key.split_once(TRIP_KEY_DELIMITER)?;

        Some(Self {
            most_common_start,
            most_common_end,
            most_common_trip: TripEndpoints {
                start: start.to_owned(),
                end: end.to_owned(),
            },
        })
    }
}

#[cfg(test)]
#[path = "stations_tests.rs"]
mod tests;
