use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::appointment::ExistingAppointment;

/// Returns true when `[candidate_start, candidate_end)` collides with one of
/// `technician_id`'s appointments.
///
/// Each appointment is stretched by `buffer` past its end. The buffer only trails
/// existing appointments: a candidate may end exactly when one begins. Appointments
/// for other technicians, or with no technician, are ignored.
pub fn overlaps(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    technician_id: Uuid,
    appointments: &[ExistingAppointment],
    buffer: Duration,
) -> bool {
    appointments
        .iter()
        .filter(|appointment| appointment.technician_id == Some(technician_id))
        .any(|appointment| {
            let extended_end = appointment.end_time + buffer;
            candidate_start < extended_end && candidate_end > appointment.start_time
        })
}
