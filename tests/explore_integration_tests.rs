//! Integration tests for the interactive explore loop, driven by scripted
//! stdin.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn explore_is_the_default_command() {
    let fixture = TestFixture::new();
    fixture.create_chicago();

    bikeshare_stats!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .write_stdin("c\njun\nthu\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hello! Let's explore some US bikeshare data!",
        ))
        .stdout(predicate::str::contains(
            "Calculating The Most Frequent Times of Travel...",
        ))
        .stdout(predicate::str::contains("The most common month is June."))
        .stdout(predicate::str::contains("The most common day is Thursday."))
        .stdout(predicate::str::contains("Calculating User Stats..."))
        .stdout(predicate::str::contains("This took "))
        .stdout(predicate::str::contains(
            "----Thanks for using our program and hope to serve you again in the future.----",
        ));
}

#[test]
fn explore_subcommand_runs_the_same_loop() {
    let fixture = TestFixture::new();
    fixture.create_chicago();

    bikeshare_stats!()
        .current_dir(fixture.path())
        .args(["explore", "--no-config"])
        .write_stdin("c\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculating Trip Duration..."))
        .stdout(predicate::str::contains(
            "Total travel time is 0 hours 55 minutes 0 seconds.",
        ));
}

#[test]
fn explore_reprompts_on_invalid_city() {
    let fixture = TestFixture::new();
    fixture.create_chicago();

    bikeshare_stats!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .write_stdin("zz\nc\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Looks like you entered an invalid name. Please Try again.",
        ))
        .stdout(predicate::str::contains(
            "Example of valid input: 'NY' for New York.",
        ));
}

#[test]
fn explore_pages_raw_records_until_end_of_data() {
    let fixture = TestFixture::new();
    fixture.create_chicago();

    bikeshare_stats!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .write_stdin("c\nall\nall\nyes\nyes\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would you like to show a sample of the data?",
        ))
        .stdout(predicate::str::contains(
            "Trip Duration | Start Station | End Station | User Type | Gender",
        ))
        .stdout(predicate::str::contains("300 | Canal St | State St | Subscriber | Male"))
        .stdout(predicate::str::contains("End of data"));
}

#[test]
fn explore_end_of_input_prints_farewell() {
    let fixture = TestFixture::new();
    fixture.create_chicago();

    bikeshare_stats!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "----Thanks for using our program and hope to serve you again in the future.----",
        ));
}

#[test]
fn explore_missing_dataset_reports_and_reprompts() {
    let fixture = TestFixture::new();

    bikeshare_stats!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .write_stdin("c\nall\nall\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available for chicago"));
}

#[test]
fn explore_washington_demographics_degrade() {
    let fixture = TestFixture::new();
    fixture.create_washington();

    bikeshare_stats!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .write_stdin("w\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No gender data available for the selected city.",
        ))
        .stdout(predicate::str::contains(
            "No birth date data available for the selected city.",
        ));
}
