//! Trip records, the loaded record set, and sample paging.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::calendar::{self, Weekday};
use crate::filter::FilterCriteria;

/// Number of raw records shown per page of sample output.
pub const PAGE_SIZE: usize = 5;

/// One parsed trip row with its derived time fields attached.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    /// `None` when the cell is empty.
    pub user_type: Option<String>,
    /// `None` when the column is absent or the cell is empty.
    pub gender: Option<String>,
    /// `None` when the column is absent, the cell is empty, or the value
    /// does not parse as a year.
    pub birth_year: Option<i32>,
    /// Monday=0 .. Sunday=6, derived from `start_time` at load time.
    pub weekday: Weekday,
    /// 1..=12, derived from `start_time` at load time.
    pub month: u32,
    /// 0..=23, derived from `start_time` at load time.
    pub start_hour: u32,
}

impl TripRecord {
    /// Build a record from parsed source fields, deriving the calendar
    /// fields from `start_time`.
    #[must_use]
    pub fn new(
        start_time: NaiveDateTime,
        duration_secs: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let parts = calendar::decompose(start_time);
        Self {
            start_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            weekday: parts.weekday,
            month: parts.month,
            start_hour: parts.hour,
        }
    }

    /// Projection of this record for sample paging output.
    #[must_use]
    pub fn sample_row(&self) -> SampleRow {
        SampleRow {
            trip_duration: self.duration_secs,
            start_station: self.start_station.clone(),
            end_station: self.end_station.clone(),
            user_type: self.user_type.clone(),
            gender: self.gender.clone(),
        }
    }
}

/// The subset of record fields shown when paging through raw data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
}

/// Which optional columns the source CSV carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// Ordered trip records for one city plus the schema captured at load time.
///
/// Filtering never mutates a loaded set; it produces a new subset that
/// preserves source row order, which paging depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    schema: Schema,
    records: Vec<TripRecord>,
}

impl RecordSet {
    #[must_use]
    pub const fn new(schema: Schema, records: Vec<TripRecord>) -> Self {
        Self { schema, records }
    }

    #[must_use]
    pub const fn schema(&self) -> Schema {
        self.schema
    }

    #[must_use]
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `criteria`, in source order, under the same schema.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Self {
        Self {
            schema: self.schema,
            records: self
                .records
                .iter()
                .filter(|record| criteria.matches(record))
                .cloned()
                .collect(),
        }
    }

    /// Up to [`PAGE_SIZE`] records starting at `offset`, or `None` once the
    /// offset is at or past the end of the set.
    #[must_use]
    pub fn page(&self, offset: usize) -> Option<&[TripRecord]> {
        if offset >= self.records.len() {
            return None;
        }
        let end = usize::min(offset + PAGE_SIZE, self.records.len());
        Some(&self.records[offset..end])
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
