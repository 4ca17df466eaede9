use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike, Weekday};

use crate::models::technician::{Technician, WorkingDay, WorkingHours};

/// A working window as minutes since local midnight, `start_minute < end_minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingWindow {
    pub start_minute: i64,
    pub end_minute: i64,
}

impl WorkingWindow {
    /// True when `[start_minute, end_minute)` lies entirely inside the window.
    pub fn fits(&self, start_minute: i64, end_minute: i64) -> bool {
        start_minute >= self.start_minute && end_minute <= self.end_minute
    }

    /// Smallest window covering all of `windows`, or `None` if there are none.
    pub fn span(windows: impl IntoIterator<Item = WorkingWindow>) -> Option<WorkingWindow> {
        windows.into_iter().reduce(|acc, w| WorkingWindow {
            start_minute: acc.start_minute.min(w.start_minute),
            end_minute: acc.end_minute.max(w.end_minute),
        })
    }
}

impl From<WorkingHours> for WorkingWindow {
    fn from(hours: WorkingHours) -> Self {
        Self {
            start_minute: minute_of_day(hours.start),
            end_minute: minute_of_day(hours.end),
        }
    }
}

pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Working window of `technician` on `weekday`, or `None` on a day off.
pub fn resolve_window(technician: &Technician, weekday: Weekday) -> Option<WorkingWindow> {
    match technician.weekly_schedule.day(weekday) {
        WorkingDay::Working(hours) => Some(hours.into()),
        WorkingDay::DayOff => None,
    }
}

pub fn resolve_today_window(
    technician: &Technician,
    now: &DateTime<FixedOffset>,
) -> Option<WorkingWindow> {
    resolve_window(technician, now.weekday())
}
