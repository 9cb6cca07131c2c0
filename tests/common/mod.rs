#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bikeshare-stats binary.
#[macro_export]
macro_rules! bikeshare_stats {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bikeshare-stats"))
    };
}

/// Header carried by the Chicago and New York City datasets.
pub const FULL_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

/// Header carried by the Washington dataset (no gender, no birth year).
pub const WASHINGTON_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

/// Five Chicago trips with known statistics:
/// most common month June, day Thursday, hour 8; most common start
/// station Canal St, end station State St, trip Canal St --> State St;
/// total duration 3300s (0h 55m 0s), mean 660s (0h 11m 0s);
/// 3 Subscribers / 2 Customers, 2 Male / 2 Female, birth years 1975-1990.
pub const CHICAGO_ROWS: &str = "\
0,2017-06-15 08:00:00,2017-06-15 08:05:00,300,Canal St,State St,Subscriber,Male,1984
1,2017-06-15 08:10:00,2017-06-15 08:20:00,600,Canal St,State St,Subscriber,Female,1990
2,2017-06-15 17:30:00,2017-06-15 17:45:00,900,Clark St,Lake St,Customer,Male,1975
3,2017-05-01 12:00:00,2017-05-01 12:20:00,1200,Canal St,Wells St,Subscriber,,1990
4,2017-05-01 09:00:00,2017-05-01 09:05:00,300,Clark St,State St,Customer,Female,";

/// Creates a temporary directory with dataset fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a basic bikeshare-stats config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bikeshare-stats.toml", content);
    }

    /// Creates a city CSV from a header line and data rows.
    pub fn create_city_csv(&self, file_name: &str, header: &str, rows: &str) {
        self.create_file(file_name, &format!("{header}\n{rows}\n"));
    }

    /// Creates the standard Chicago dataset described by [`CHICAGO_ROWS`].
    pub fn create_chicago(&self) {
        self.create_city_csv("chicago.csv", FULL_HEADER, CHICAGO_ROWS);
    }

    /// Creates a Washington dataset without the optional columns.
    pub fn create_washington(&self) {
        self.create_city_csv(
            "washington.csv",
            WASHINGTON_HEADER,
            "0,2017-03-01 10:00:00,2017-03-01 10:30:00,1800,K St,M St,Subscriber\n\
             1,2017-03-02 11:00:00,2017-03-02 11:10:00,600,K St,M St,Customer",
        );
    }
}
