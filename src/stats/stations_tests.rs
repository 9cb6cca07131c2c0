use super::StationStats;
use crate::stats::test_fixtures::{set, trip};

#[test]
fn compute_picks_most_frequent_stations_and_trip() {
    let set = set(vec![trip("A", "B"), trip("A", "B"), trip("A", "C")]);

    let stats = StationStats::compute(&set).expect("non-empty set");
    assert_eq!(stats.most_common_start, "A");
    assert_eq!(stats.most_common_end, "B");
    assert_eq!(stats.most_common_trip.start, "A");
    assert_eq!(stats.most_common_trip.end, "B");
}

#[test]
fn compute_start_and_end_modes_are_independent() {
    // "B" dominates as an end even though the most frequent trip ends at "C".
    let set = set(vec![
        trip("A", "C"),
        trip("A", "C"),
        trip("D", "B"),
        trip("E", "B"),
        trip("F", "B"),
    ]);

    let stats = StationStats::compute(&set).expect("non-empty set");
    assert_eq!(stats.most_common_start, "A");
    assert_eq!(stats.most_common_end, "B");
    assert_eq!(stats.most_common_trip.start, "A");
    assert_eq!(stats.most_common_trip.end, "C");
}

#[test]
fn compute_trip_tie_breaks_lexicographically() {
    let set = set(vec![trip("B", "A"), trip("A", "B")]);

    let stats = StationStats::compute(&set).expect("non-empty set");
    assert_eq!(stats.most_common_trip.start, "A");
    assert_eq!(stats.most_common_trip.end, "B");
}

#[test]
fn compute_splits_at_first_delimiter() {
    // A start station containing the delimiter corrupts the recovered
    // endpoints; the split stays at the first delimiter.
    let set = set(vec![trip("A/B", "C"), trip("A/B", "C")]);

    let stats = StationStats::compute(&set).expect("non-empty set");
    assert_eq!(stats.most_common_trip.start, "A");
    assert_eq!(stats.most_common_trip.end, "B/C");
}

#[test]
fn compute_empty_set_is_none() {
    assert_eq!(StationStats::compute(&set(Vec::new())), None);
}
