//! Dataset loading and per-record calendar decomposition.

pub mod calendar;
pub mod loader;
pub mod record;

pub use calendar::{TimeParts, Weekday, decompose, month_name, weekday_from_ymd};
pub use loader::{DatasetLoader, START_TIME_FORMAT};
pub use record::{PAGE_SIZE, RecordSet, SampleRow, Schema, TripRecord};
