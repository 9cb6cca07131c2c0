//! Filter criteria for narrowing a city's record set.
//!
//! A criteria triple (city, month, day) is validated against closed
//! vocabularies before any data is touched: months cover January through
//! June (the range the source datasets ship), days are the seven weekdays.
//! Either filter can be `all`, which disables it.

use clap::ValueEnum;

use crate::dataset::calendar::{Weekday, month_name};
use crate::dataset::record::TripRecord;

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// Default backing file name, resolved inside the data directory.
    #[must_use]
    pub const fn data_file(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    /// Interactive short code: city initial(s) only.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.eq_ignore_ascii_case("c") {
            Some(Self::Chicago)
        } else if code.eq_ignore_ascii_case("ny") {
            Some(Self::NewYorkCity)
        } else if code.eq_ignore_ascii_case("w") {
            Some(Self::Washington)
        } else {
            None
        }
    }
}

/// Month narrowing: `all` or a single month in the January–June range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(u32),
}

const MONTH_ABBREVS: [&str; 6] = ["jan", "feb", "mar", "apr", "may", "jun"];

impl MonthFilter {
    #[must_use]
    pub const fn matches(self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Month(selected) => selected == month,
        }
    }

    /// Human-readable label: `all` or the full month name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Month(selected) => month_name(selected),
        }
    }
}

impl std::str::FromStr for MonthFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "all" {
            return Ok(Self::All);
        }
        MONTH_ABBREVS
            .iter()
            .position(|abbrev| *abbrev == lower)
            .map_or_else(
                || Err(format!("Unknown month `{s}` (expected jan..jun, or all)")),
                |index| Ok(Self::Month(index as u32 + 1)),
            )
    }
}

/// Day-of-week narrowing: `all` or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Day(Weekday),
}

impl DayFilter {
    #[must_use]
    pub const fn matches(self, weekday: Weekday) -> bool {
        match self {
            Self::All => true,
            Self::Day(selected) => selected as u8 == weekday as u8,
        }
    }

    /// Human-readable label: `all` or the full day name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Day(selected) => selected.name(),
        }
    }
}

impl std::str::FromStr for DayFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "all" {
            return Ok(Self::All);
        }
        Weekday::from_abbrev(&lower).map_or_else(
            || Err(format!("Unknown day `{s}` (expected mon..sun, or all)")),
            |weekday| Ok(Self::Day(weekday)),
        )
    }
}

/// One iteration's immutable (city, month, day) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    #[must_use]
    pub const fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Whether the record survives both the month and the day filter.
    #[must_use]
    pub const fn matches(&self, record: &TripRecord) -> bool {
        self.month.matches(record.month) && self.day.matches(record.weekday)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
