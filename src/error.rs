use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No data available for {city}: {path}")]
    DataUnavailable {
        city: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required column `{column}` in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    #[error("Failed to read {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid start time `{value}` on line {line}")]
    InvalidTimestamp {
        value: String,
        line: u64,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid trip duration `{value}` on line {line}")]
    InvalidDuration {
        value: String,
        line: u64,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BikeshareError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
