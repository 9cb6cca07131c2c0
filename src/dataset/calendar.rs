//! Calendar decomposition of trip start times.
//!
//! Day-of-week is computed from the (year, month, day) triple with exact
//! proleptic-Gregorian arithmetic (Sakamoto's method) rather than a
//! weekday-from-timestamp shortcut, so the Monday=0..Sunday=6 indexing the
//! filters rely on never depends on a library's epoch convention.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// Day of the week, Monday first.
///
/// The discriminant order is load-bearing: `as u8` yields the Monday=0
/// index used by day filters and mode tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Monday=0 .. Sunday=6.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Three-letter abbreviation (`mon` .. `sun`), lowercase only.
    #[must_use]
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        match abbrev {
            "mon" => Some(Self::Monday),
            "tue" => Some(Self::Tuesday),
            "wed" => Some(Self::Wednesday),
            "thu" => Some(Self::Thursday),
            "fri" => Some(Self::Friday),
            "sat" => Some(Self::Saturday),
            "sun" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Index taken modulo 7, Monday=0.
    const fn from_monday_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Full English month name for 1..=12.
#[must_use]
pub const fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "unknown",
    }
}

/// Month offsets for Sakamoto's day-of-week method.
const SAKAMOTO_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Day of week for a proleptic-Gregorian date, Monday=0.
///
/// `month` is 1..=12 and `day` 1..=31 as produced by a parsed timestamp.
#[must_use]
pub fn weekday_from_ymd(year: i32, month: u32, day: u32) -> Weekday {
    let year = i64::from(if month < 3 { year - 1 } else { year });
    let offset = SAKAMOTO_OFFSETS[(month as usize - 1) % 12];
    let sunday_based = (year + year.div_euclid(4) - year.div_euclid(100)
        + year.div_euclid(400)
        + offset
        + i64::from(day))
    .rem_euclid(7);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let monday_based = ((sunday_based + 6) % 7) as u8;
    Weekday::from_monday_index(monday_based)
}

/// Fields derived from a start time before any filtering happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub weekday: Weekday,
    pub month: u32,
    pub hour: u32,
}

/// Decompose a start time into its derived fields. Pure and deterministic.
#[must_use]
pub fn decompose(start_time: NaiveDateTime) -> TimeParts {
    TimeParts {
        weekday: weekday_from_ymd(start_time.year(), start_time.month(), start_time.day()),
        month: start_time.month(),
        hour: start_time.hour(),
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
