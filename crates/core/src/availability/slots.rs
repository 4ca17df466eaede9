use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use tracing::debug;
use uuid::Uuid;

use super::{
    conflict::overlaps,
    schedule::{resolve_window, WorkingWindow},
    SlotPolicy,
};
use crate::models::{
    appointment::ExistingAppointment, technician::Technician, time_slot::TimeSlot,
};

/// Computes the start times at which an appointment of `required_duration` minutes
/// can begin today.
///
/// "Today" and the local wall-clock are taken from `now`. With a `technician_id`
/// only that technician is considered; with `None` a candidate is open if at least
/// one technician working today can take it.
///
/// # Algorithm
///
/// 1. Collect the working window of every eligible technician for today's weekday.
///    The search window is the span of those windows.
/// 2. The earliest candidate is `now` plus the preparation buffer, rounded up to the
///    rounding boundary and clamped to the start of the search window.
/// 3. Candidates are spaced by the cadence from there up to the end of the search
///    window. Each one is kept if some eligible technician's own window contains the
///    whole appointment and it does not collide with that technician's appointments.
///
/// Closed candidates are dropped, so every returned slot has `available: true`.
/// An empty list means nothing is bookable: day off, already past closing, fully
/// booked, unknown technician, a duration that is non-positive or longer than the
/// working day, or an invalid `policy`.
pub fn generate_slots(
    appointments: &[ExistingAppointment],
    technician_id: Option<Uuid>,
    required_duration: i64,
    technicians: &[Technician],
    now: DateTime<FixedOffset>,
    policy: &SlotPolicy,
) -> Vec<TimeSlot> {
    if required_duration <= 0 {
        return Vec::new();
    }
    if let Err(err) = policy.validate() {
        debug!(?policy, "Refusing to generate slots: {}", err);
        return Vec::new();
    }

    let weekday = now.weekday();
    let eligible: Vec<(&Technician, WorkingWindow)> = technicians
        .iter()
        .filter(|technician| technician_id.is_none_or(|id| technician.id == id))
        .filter_map(|technician| resolve_window(technician, weekday).map(|w| (technician, w)))
        .collect();

    let Some(search) = WorkingWindow::span(eligible.iter().map(|(_, window)| *window)) else {
        debug!(?technician_id, ?weekday, "No technician works today");
        return Vec::new();
    };

    // Nothing longer than the search window can fit, however it is placed
    if required_duration > search.end_minute - search.start_minute {
        debug!(required_duration, ?search, "Appointment longer than any working window");
        return Vec::new();
    }

    let first = earliest_start(&now, policy).max(search.start_minute);
    if first >= search.end_minute {
        debug!(first, end = search.end_minute, "Search window already over");
        return Vec::new();
    }

    let day = now.date_naive();
    let offset = *now.offset();
    let duration = Duration::minutes(required_duration);
    let buffer = policy.appointment_buffer();

    let slots: Vec<TimeSlot> = (first..search.end_minute)
        .step_by(policy.cadence_minutes as usize)
        .filter_map(|start_minute| {
            let end_minute = start_minute + required_duration;
            let start = local_instant(day, start_minute, offset)?;
            let start_utc = start.with_timezone(&Utc);
            let end_utc = start_utc + duration;

            let open = eligible.iter().any(|(technician, window)| {
                window.fits(start_minute, end_minute)
                    && !overlaps(start_utc, end_utc, technician.id, appointments, buffer)
            });

            open.then(|| TimeSlot {
                label: slot_label(&start),
                time: start,
                available: true,
            })
        })
        .collect();

    debug!(
        ?technician_id,
        required_duration,
        technicians = eligible.len(),
        slots = slots.len(),
        "Generated walk-in slots"
    );
    slots
}

/// Minutes since midnight of the first candidate start, before clamping.
pub fn earliest_start(now: &DateTime<FixedOffset>, policy: &SlotPolicy) -> i64 {
    let now_minute = i64::from(now.hour()) * 60 + i64::from(now.minute());
    let ready = now_minute + policy.preparation_buffer_minutes;
    let step = policy.rounding_minutes;
    (ready + step - 1) / step * step
}

fn local_instant(
    day: NaiveDate,
    minute_of_day: i64,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    let naive = day.and_hms_opt(0, 0, 0)? + Duration::minutes(minute_of_day);
    offset.from_local_datetime(&naive).single()
}

/// "9:00 AM", "12:30 PM".
pub fn slot_label(time: &DateTime<FixedOffset>) -> String {
    time.format("%-I:%M %p").to_string()
}
