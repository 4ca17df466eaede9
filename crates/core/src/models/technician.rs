use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SalonError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technician {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub weekly_schedule: WeeklySchedule,
    pub created_at: DateTime<Utc>,
}

/// Opening hours of a single working day, as local wall-clock times.
///
/// Constructing one through [`WorkingHours::new`] or deserialization guarantees
/// `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(with = "wall_clock")]
    pub start: NaiveTime,
    #[serde(with = "wall_clock")]
    pub end: NaiveTime,
}

impl WorkingHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, SalonError> {
        if end <= start {
            return Err(SalonError::Validation(format!(
                "Working hours must end after they start (got {} - {})",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }
}

/// One entry of a weekly template.
///
/// On the wire a day off is `null` and a working day is `{"start": "09:00", "end": "18:00"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<WorkingHours>", into = "Option<WorkingHours>")]
pub enum WorkingDay {
    Working(WorkingHours),
    #[default]
    DayOff,
}

impl TryFrom<Option<WorkingHours>> for WorkingDay {
    type Error = SalonError;

    fn try_from(value: Option<WorkingHours>) -> Result<Self, Self::Error> {
        match value {
            // Re-run the constructor so that deserialized hours are validated too
            Some(hours) => Ok(WorkingDay::Working(WorkingHours::new(hours.start, hours.end)?)),
            None => Ok(WorkingDay::DayOff),
        }
    }
}

impl From<WorkingDay> for Option<WorkingHours> {
    fn from(day: WorkingDay) -> Self {
        match day {
            WorkingDay::Working(hours) => Some(hours),
            WorkingDay::DayOff => None,
        }
    }
}

/// Recurring weekly working hours of a technician.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    pub monday: WorkingDay,
    pub tuesday: WorkingDay,
    pub wednesday: WorkingDay,
    pub thursday: WorkingDay,
    pub friday: WorkingDay,
    pub saturday: WorkingDay,
    pub sunday: WorkingDay,
}

impl WeeklySchedule {
    pub fn day(&self, weekday: Weekday) -> WorkingDay {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Same hours on every day of the week.
    pub fn every_day(day: WorkingDay) -> Self {
        Self {
            monday: day,
            tuesday: day,
            wednesday: day,
            thursday: day,
            friday: day,
            saturday: day,
            sunday: day,
        }
    }

    /// Returns a copy with `weekday` replaced.
    pub fn with_day(mut self, weekday: Weekday, day: WorkingDay) -> Self {
        let slot = match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = day;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTechnicianRequest {
    pub name: String,
    #[serde(default)]
    pub weekly_schedule: WeeklySchedule,
}

impl CreateTechnicianRequest {
    pub fn validate(&self) -> Result<(), SalonError> {
        if self.name.trim().is_empty() {
            return Err(SalonError::Validation("Technician name must not be empty".to_string()));
        }
        Ok(())
    }
}

/// `HH:MM` wall-clock times. Seconds are accepted on input and dropped on output.
pub mod wall_clock {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map_err(|_| format!("invalid wall-clock time '{}', expected HH:MM", raw))
    }
}
