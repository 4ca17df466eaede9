//! # Walk-in availability engine
//!
//! Given the services a client picked, an optional technician, every technician's
//! weekly template and today's appointments, computes the start times at which a new
//! appointment can begin today.
//!
//! - [`schedule`] resolves a technician's working window for a weekday.
//! - [`conflict`] tests a candidate range against a technician's appointments.
//! - [`slots`] enumerates candidate start times and keeps the open ones.
//! - [`booking`] re-runs the same rules for a single requested start time.
//!
//! Every function here is pure. "Now" is always a parameter.

pub mod booking;
pub mod conflict;
pub mod schedule;
pub mod slots;

pub use booking::{check_booking, first_available_technician, BookingCandidate, BookingCheck};
pub use conflict::overlaps;
pub use schedule::{resolve_today_window, resolve_window, WorkingWindow};
pub use slots::generate_slots;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::{SalonError, SalonResult};

/// Tunables of the availability engine, all in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPolicy {
    /// Cleanup time kept free after every existing appointment.
    pub appointment_buffer_minutes: i64,
    /// Lead time added to "now" before the first candidate.
    pub preparation_buffer_minutes: i64,
    /// The first candidate is rounded up to a multiple of this.
    pub rounding_minutes: i64,
    /// Spacing between consecutive candidates.
    pub cadence_minutes: i64,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            appointment_buffer_minutes: 10,
            preparation_buffer_minutes: 15,
            rounding_minutes: 15,
            cadence_minutes: 30,
        }
    }
}

impl SlotPolicy {
    pub fn validate(&self) -> SalonResult<()> {
        if self.rounding_minutes <= 0 || self.cadence_minutes <= 0 {
            return Err(SalonError::Validation(format!(
                "Slot rounding and cadence must be positive (rounding={}, cadence={})",
                self.rounding_minutes, self.cadence_minutes
            )));
        }
        if self.appointment_buffer_minutes < 0 || self.preparation_buffer_minutes < 0 {
            return Err(SalonError::Validation(format!(
                "Slot buffers must not be negative (appointment={}, preparation={})",
                self.appointment_buffer_minutes, self.preparation_buffer_minutes
            )));
        }
        Ok(())
    }

    pub fn appointment_buffer(&self) -> Duration {
        Duration::minutes(self.appointment_buffer_minutes)
    }
}
