use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SalonError, SalonResult};

/// The slice of a booked appointment the availability engine looks at.
///
/// Appointments without a technician never conflict with anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingAppointment {
    pub technician_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub client_name: String,
    pub client_phone: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<&Appointment> for ExistingAppointment {
    fn from(appointment: &Appointment) -> Self {
        Self {
            technician_id: appointment.technician_id,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub service_ids: Vec<Uuid>,
    pub technician_id: Option<Uuid>,
    pub client_name: String,
    pub client_phone: String,
    pub start_time: DateTime<Utc>,
}

impl CreateAppointmentRequest {
    pub fn validate(&self) -> SalonResult<()> {
        if self.service_ids.is_empty() {
            return Err(SalonError::Validation(
                "At least one service must be selected".to_string(),
            ));
        }
        if self.client_name.trim().is_empty() {
            return Err(SalonError::Validation("Client name must not be empty".to_string()));
        }
        if self.client_phone.trim().is_empty() {
            return Err(SalonError::Validation("Client phone must not be empty".to_string()));
        }
        Ok(())
    }
}
