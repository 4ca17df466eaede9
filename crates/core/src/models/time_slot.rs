use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A bookable start time produced by the availability engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: DateTime<FixedOffset>,
    /// 12-hour wall-clock label, e.g. "9:30 AM".
    pub label: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub required_duration_minutes: i64,
    pub slots: Vec<TimeSlot>,
}
