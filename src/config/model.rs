use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BikeshareError, Result};
use crate::filter::City;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Dataset location settings.
    #[serde(default)]
    pub data: DataConfig,
}

/// Dataset location settings `[data]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    /// Directory the city CSV files live in (default: current directory).
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// Per-city file-name overrides `[data.files]`.
    #[serde(default)]
    pub files: CityFiles,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            files: CityFiles::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Per-city backing file names, overriding the built-in mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CityFiles {
    #[serde(default)]
    pub chicago: Option<String>,

    #[serde(default)]
    pub new_york_city: Option<String>,

    #[serde(default)]
    pub washington: Option<String>,
}

impl CityFiles {
    fn for_city(&self, city: City) -> Option<&String> {
        match city {
            City::Chicago => self.chicago.as_ref(),
            City::NewYorkCity => self.new_york_city.as_ref(),
            City::Washington => self.washington.as_ref(),
        }
    }
}

impl Config {
    /// Resolved path of the CSV file backing `city`.
    #[must_use]
    pub fn data_path(&self, city: City) -> PathBuf {
        let file = self
            .data
            .files
            .for_city(city)
            .map_or(city.data_file(), String::as_str);
        self.data.dir.join(file)
    }

    /// Returns a copy with the data directory replaced (CLI override).
    #[must_use]
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data.dir = dir;
        self
    }

    /// Validate semantic constraints that serde cannot express.
    ///
    /// # Errors
    /// Returns an error if the data directory or a file override is empty.
    pub fn validate(&self) -> Result<()> {
        if self.data.dir.as_os_str().is_empty() {
            return Err(BikeshareError::Config(
                "data.dir must not be empty".to_string(),
            ));
        }

        let overrides = [
            ("chicago", &self.data.files.chicago),
            ("new_york_city", &self.data.files.new_york_city),
            ("washington", &self.data.files.washington),
        ];
        for (name, file) in overrides {
            if let Some(file) = file
                && file.trim().is_empty()
            {
                return Err(BikeshareError::Config(format!(
                    "data.files.{name} must not be empty"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
