use chrono::{DateTime, Datelike, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    conflict::overlaps,
    schedule::{minute_of_day, resolve_window},
    SlotPolicy,
};
use crate::models::{appointment::ExistingAppointment, technician::Technician};

/// A single start time a client asked to book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingCandidate {
    pub start: DateTime<Utc>,
    pub required_duration: i64,
    pub technician_id: Option<Uuid>,
}

impl BookingCandidate {
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.required_duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingCheck {
    Accepted,
    NothingToSchedule,
    InPast,
    OutsideWorkingHours,
    Conflict,
}

/// Re-checks a requested booking against a fresh appointment snapshot.
///
/// Uses the same window and conflict rules as slot generation, but on the weekday
/// of the requested start and without requiring it to sit on the slot grid.
pub fn check_booking(
    candidate: &BookingCandidate,
    technicians: &[Technician],
    appointments: &[ExistingAppointment],
    now: DateTime<FixedOffset>,
    policy: &SlotPolicy,
) -> BookingCheck {
    if candidate.required_duration <= 0 {
        return BookingCheck::NothingToSchedule;
    }
    if candidate.start < now.with_timezone(&Utc) {
        return BookingCheck::InPast;
    }

    let fitting = fitting_technicians(candidate, technicians, now.offset());
    if fitting.is_empty() {
        return BookingCheck::OutsideWorkingHours;
    }

    let end = candidate.end();
    let buffer = policy.appointment_buffer();
    if fitting
        .iter()
        .any(|technician| !overlaps(candidate.start, end, technician.id, appointments, buffer))
    {
        BookingCheck::Accepted
    } else {
        BookingCheck::Conflict
    }
}

/// First technician, in list order, who can take `candidate`.
pub fn first_available_technician<'a>(
    candidate: &BookingCandidate,
    technicians: &'a [Technician],
    appointments: &[ExistingAppointment],
    offset: &FixedOffset,
    policy: &SlotPolicy,
) -> Option<&'a Technician> {
    if candidate.required_duration <= 0 {
        return None;
    }
    let fitting = fitting_technicians(candidate, technicians, offset);
    if fitting.is_empty() {
        return None;
    }
    let end = candidate.end();
    let buffer = policy.appointment_buffer();
    fitting
        .into_iter()
        .find(|technician| !overlaps(candidate.start, end, technician.id, appointments, buffer))
}

fn fitting_technicians<'a>(
    candidate: &BookingCandidate,
    technicians: &'a [Technician],
    offset: &FixedOffset,
) -> Vec<&'a Technician> {
    let local = candidate.start.with_timezone(offset);
    let start_minute = minute_of_day(local.time());
    let end_minute = start_minute.saturating_add(candidate.required_duration);

    technicians
        .iter()
        .filter(|technician| candidate.technician_id.is_none_or(|id| technician.id == id))
        .filter(|technician| {
            resolve_window(technician, local.weekday())
                .is_some_and(|window| window.fits(start_minute, end_minute))
        })
        .collect()
}
