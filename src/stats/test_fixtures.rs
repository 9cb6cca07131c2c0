//! Shared test fixtures for reporter tests.
//!
//! Provides record and record-set builders used across the travel, station,
//! duration, demographics and report test modules.

use chrono::{NaiveDate, NaiveDateTime};

use crate::dataset::{RecordSet, Schema, TripRecord};

/// 2017 start time at the given month, day and hour.
pub fn start(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, month, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

/// Subscriber trip between two stations, starting 2017-06-15 09:00.
pub fn trip(from: &str, to: &str) -> TripRecord {
    trip_full(6, 15, 9, 300.0, from, to)
}

/// Subscriber trip at the given month/day/hour between stations "A" and "B".
pub fn trip_at(month: u32, day: u32, hour: u32) -> TripRecord {
    trip_full(month, day, hour, 300.0, "A", "B")
}

/// Subscriber trip with the given duration, starting 2017-06-15 09:00.
pub fn trip_lasting(duration_secs: f64) -> TripRecord {
    trip_full(6, 15, 9, duration_secs, "A", "B")
}

pub fn trip_full(
    month: u32,
    day: u32,
    hour: u32,
    duration_secs: f64,
    from: &str,
    to: &str,
) -> TripRecord {
    TripRecord::new(
        start(month, day, hour),
        duration_secs,
        from.to_owned(),
        to.to_owned(),
        Some("Subscriber".to_owned()),
        None,
        None,
    )
}

/// Trip described by its rider fields only.
pub fn rider(user_type: Option<&str>, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
    TripRecord::new(
        start(6, 15, 9),
        300.0,
        "A".to_owned(),
        "B".to_owned(),
        user_type.map(str::to_owned),
        gender.map(str::to_owned),
        birth_year,
    )
}

/// Record set carrying both optional columns.
pub fn set(records: Vec<TripRecord>) -> RecordSet {
    RecordSet::new(
        Schema {
            has_gender: true,
            has_birth_year: true,
        },
        records,
    )
}

/// Record set without the optional columns, as Washington's data is shaped.
pub fn bare_set(records: Vec<TripRecord>) -> RecordSet {
    RecordSet::new(Schema::default(), records)
}
