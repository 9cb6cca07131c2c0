use indexmap::IndexMap;
use serde_json::Value;

use super::*;
use crate::dataset::Weekday;
use crate::filter::{City, DayFilter, FilterCriteria, MonthFilter};
use crate::stats::{
    BirthYearStats, CityReport, DemographicsStats, DurationStats, StationStats, TravelTimeStats,
    TripEndpoints,
};

fn full_report() -> CityReport {
    CityReport {
        record_count: 3,
        travel: Some(TravelTimeStats {
            most_common_month: 6,
            most_common_weekday: Weekday::Thursday,
            most_common_hour: 13,
        }),
        stations: Some(StationStats {
            most_common_start: "Canal St".to_owned(),
            most_common_end: "State St".to_owned(),
            most_common_trip: TripEndpoints {
                start: "Canal St".to_owned(),
                end: "State St".to_owned(),
            },
        }),
        duration: Some(DurationStats {
            total_secs: 3725.0,
            mean_secs: 1241.7,
        }),
        demographics: Some(DemographicsStats {
            user_types: IndexMap::from([("Subscriber".to_owned(), 3)]),
            genders: Some(IndexMap::from([("Male".to_owned(), 3)])),
            birth_years: Some(BirthYearStats {
                earliest: 1959,
                most_recent: 2001,
                most_common: 1992,
            }),
        }),
    }
}

fn parse(document: &ReportDocument) -> Value {
    let output = JsonReportFormatter::new()
        .format(document)
        .expect("formats");
    serde_json::from_str(&output).expect("valid json")
}

#[test]
fn format_emits_criteria_and_stats() {
    let criteria = FilterCriteria::new(
        City::Chicago,
        MonthFilter::Month(6),
        DayFilter::Day(Weekday::Thursday),
    );
    let value = parse(&ReportDocument::new(criteria, full_report()));

    assert_eq!(value["city"], "chicago");
    assert_eq!(value["month"], "June");
    assert_eq!(value["day"], "Thursday");
    assert_eq!(value["record_count"], 3);
    assert_eq!(value["travel"]["most_common_month"], 6);
    assert_eq!(value["travel"]["most_common_weekday"], "Thursday");
    assert_eq!(value["travel"]["most_common_hour"], 13);
    assert_eq!(value["stations"]["most_common_trip"]["end"], "State St");
    assert_eq!(value["duration"]["total_secs"], 3725.0);
    assert_eq!(value["demographics"]["user_types"]["Subscriber"], 3);
    assert_eq!(value["demographics"]["birth_years"]["earliest"], 1959);
}

#[test]
fn format_skips_empty_blocks() {
    let criteria = FilterCriteria::new(City::Washington, MonthFilter::All, DayFilter::All);
    let report = CityReport {
        record_count: 0,
        travel: None,
        stations: None,
        duration: None,
        demographics: None,
    };
    let value = parse(&ReportDocument::new(criteria, report));

    assert_eq!(value["record_count"], 0);
    assert_eq!(value["month"], "all");
    assert!(value.get("travel").is_none());
    assert!(value.get("stations").is_none());
    assert!(value.get("duration").is_none());
    assert!(value.get("demographics").is_none());
    assert!(value.get("sample").is_none());
}

#[test]
fn format_includes_sample_when_present() {
    let criteria = FilterCriteria::new(City::Chicago, MonthFilter::All, DayFilter::All);
    let sample = vec![crate::dataset::SampleRow {
        trip_duration: 300.0,
        start_station: "Canal St".to_owned(),
        end_station: "State St".to_owned(),
        user_type: Some("Subscriber".to_owned()),
        gender: None,
    }];
    let document = ReportDocument::new(criteria, full_report()).with_sample(sample);
    let value = parse(&document);

    let rows = value["sample"].as_array().expect("sample array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["start_station"], "Canal St");
    assert_eq!(rows[0]["gender"], Value::Null);
}
