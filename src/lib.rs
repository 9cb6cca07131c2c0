pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod explore;
pub mod filter;
pub mod output;
pub mod stats;

pub use error::{BikeshareError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DATA_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
