//! Rider demographic breakdowns.
//!
//! Gender and birth-year availability varies by city: Washington's dataset
//! carries neither column. Availability is decided by the record set's
//! schema, so an absent column reports as "not available" while the other
//! blocks still compute.

use indexmap::IndexMap;
use serde::Serialize;

use super::aggregate::{min_max, mode, value_counts};
use crate::dataset::{RecordSet, TripRecord};

/// User-type, gender and birth-year breakdowns over a filtered record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemographicsStats {
    /// Counts by user type, first-seen order, missing values excluded.
    pub user_types: IndexMap<String, usize>,
    /// Counts by gender; `None` when the dataset has no gender column.
    pub genders: Option<IndexMap<String, usize>>,
    /// `None` when the dataset has no birth-year column or every birth-year
    /// cell in the filtered set is missing.
    pub birth_years: Option<BirthYearStats>,
}

/// Earliest, most recent and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl DemographicsStats {
    /// Computes the breakdowns, or `None` when the set is empty.
    #[must_use]
    pub fn compute(set: &RecordSet) -> Option<Self> {
        if set.is_empty() {
            return None;
        }
        let records = set.records();
        let schema = set.schema();

        Some(Self {
            user_types: value_counts(records.iter().filter_map(|record| record.user_type.clone())),
            genders: schema
                .has_gender
                .then(|| value_counts(records.iter().filter_map(|record| record.gender.clone()))),
            birth_years: if schema.has_birth_year {
                BirthYearStats::compute(records)
            } else {
                None
            },
        })
    }
}

impl BirthYearStats {
    fn compute(records: &[TripRecord]) -> Option<Self> {
        let years = || records.iter().filter_map(|record| record.birth_year);
        let (earliest, most_recent) = min_max(years())?;
        let most_common = mode(years())?;
        Some(Self {
            earliest,
            most_recent,
            most_common,
        })
    }
}

#[cfg(test)]
#[path = "demographics_tests.rs"]
mod tests;
