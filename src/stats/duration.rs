//! Total and mean trip duration.

use serde::Serialize;

use crate::dataset::RecordSet;

/// Seconds per time unit.
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Total and mean trip duration over a filtered record set, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl DurationStats {
    /// Sums and averages `duration_secs`, or `None` when the set is empty.
    #[must_use]
    pub fn compute(set: &RecordSet) -> Option<Self> {
        if set.is_empty() {
            return None;
        }
        let total_secs: f64 = set
            .records()
            .iter()
            .map(|record| record.duration_secs)
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let mean_secs = total_secs / set.len() as f64;
        Some(Self {
            total_secs,
            mean_secs,
        })
    }
}

/// A span broken into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HmsParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Breaks a span of seconds into whole hours, minutes and seconds.
///
/// Sub-second precision is discarded; negative spans clamp to zero.
#[must_use]
pub fn to_hms(total_secs: f64) -> HmsParts {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = total_secs.max(0.0).floor() as u64;
    HmsParts {
        hours: whole / SECONDS_PER_HOUR,
        minutes: (whole / SECONDS_PER_MINUTE) % 60,
        seconds: whole % 60,
    }
}
