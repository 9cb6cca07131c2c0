mod aggregate;
mod demographics;
mod duration;
mod report;
mod stations;
mod travel;

#[cfg(test)]
mod test_fixtures;

pub use aggregate::{min_max, mode, value_counts};
pub use demographics::{BirthYearStats, DemographicsStats};
pub use duration::{DurationStats, HmsParts, to_hms};
pub use report::CityReport;
pub use stations::{StationStats, TRIP_KEY_DELIMITER, TripEndpoints};
pub use travel::TravelTimeStats;
