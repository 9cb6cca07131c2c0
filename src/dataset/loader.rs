//! CSV dataset loading.
//!
//! Decodes one city's raw trip file into a [`RecordSet`], attaching the
//! derived calendar fields and capturing which optional columns the file
//! carries. Loading never filters or aggregates.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;

use super::record::{RecordSet, Schema, TripRecord};
use crate::error::{BikeshareError, Result};
use crate::filter::City;
use crate::output::LoadProgress;

/// Timestamp layout used by all three source datasets.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const COL_START_TIME: &str = "Start Time";
const COL_TRIP_DURATION: &str = "Trip Duration";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Reads a city's raw trips from CSV into a [`RecordSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader {
    quiet: bool,
}

impl DatasetLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Hides the load spinner regardless of TTY state.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Loads the dataset backing `city` from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BikeshareError::DataUnavailable`] when the file cannot be
    /// opened, [`BikeshareError::MissingColumn`] when a required column is
    /// absent, and a decode error naming the offending value and line when a
    /// row cannot be parsed.
    pub fn load(&self, city: City, path: &Path) -> Result<RecordSet> {
        // 1. Open the backing file; a missing dataset is a user-facing error.
        let file = File::open(path).map_err(|source| BikeshareError::DataUnavailable {
            city: city.name(),
            path: path.to_path_buf(),
            source,
        })?;

        // 2. Map header columns and capture the optional-column schema.
        let mut reader = csv::Reader::from_reader(file);
        let headers = reader
            .headers()
            .map_err(|source| csv_error(path, source))?
            .clone();
        let (schema, columns) = map_columns(&headers, path)?;

        // 3. Decode rows, attaching derived calendar fields as we go.
        let progress = LoadProgress::new(city.name(), self.quiet);
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|source| csv_error(path, source))?;
            let line = row.position().map_or(0, csv::Position::line);
            records.push(decode_row(&row, &columns, line)?);
            progress.inc();
        }
        progress.finish();

        Ok(RecordSet::new(schema, records))
    }
}

/// Header positions of the columns a record is built from.
struct Columns {
    start_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

fn map_columns(headers: &StringRecord, path: &Path) -> Result<(Schema, Columns)> {
    let find = |name: &str| headers.iter().position(|header| header.trim() == name);
    let require = |name: &'static str| {
        find(name).ok_or_else(|| BikeshareError::MissingColumn {
            column: name,
            path: path.to_path_buf(),
        })
    };

    let columns = Columns {
        start_time: require(COL_START_TIME)?,
        duration: require(COL_TRIP_DURATION)?,
        start_station: require(COL_START_STATION)?,
        end_station: require(COL_END_STATION)?,
        user_type: require(COL_USER_TYPE)?,
        gender: find(COL_GENDER),
        birth_year: find(COL_BIRTH_YEAR),
    };
    let schema = Schema {
        has_gender: columns.gender.is_some(),
        has_birth_year: columns.birth_year.is_some(),
    };
    Ok((schema, columns))
}

fn decode_row(row: &StringRecord, columns: &Columns, line: u64) -> Result<TripRecord> {
    let field = |index: usize| row.get(index).unwrap_or_default();

    let raw_start = field(columns.start_time).trim();
    let start_time = NaiveDateTime::parse_from_str(raw_start, START_TIME_FORMAT).map_err(
        |source| BikeshareError::InvalidTimestamp {
            value: raw_start.to_owned(),
            line,
            source,
        },
    )?;

    let raw_duration = field(columns.duration).trim();
    let duration_secs: f64 =
        raw_duration
            .parse()
            .map_err(|source| BikeshareError::InvalidDuration {
                value: raw_duration.to_owned(),
                line,
                source,
            })?;

    Ok(TripRecord::new(
        start_time,
        duration_secs,
        field(columns.start_station).trim().to_owned(),
        field(columns.end_station).trim().to_owned(),
        normalize(field(columns.user_type)),
        columns.gender.and_then(|index| normalize(field(index))),
        columns.birth_year.and_then(|index| parse_birth_year(field(index))),
    ))
}

/// Empty and whitespace-only cells are treated as missing.
fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Birth years arrive as integers or float renderings such as `1992.0`.
/// Unparsable values are treated as missing rather than failing the load.
fn parse_birth_year(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.parse::<f64>().ok()?;
    #[allow(clippy::cast_possible_truncation)]
    let year = parsed as i32;
    Some(year)
}

fn csv_error(path: &Path, source: csv::Error) -> BikeshareError {
    BikeshareError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
