use chrono::{DateTime, Utc};
use salonslot_core::{
    errors::{SalonError, SalonResult},
    models::{
        appointment::{Appointment, ExistingAppointment},
        service::SalonService,
        technician::{Technician, WeeklySchedule},
    },
};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTechnician {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub weekly_schedule: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl DbTechnician {
    /// Converts the row into the domain model, re-validating the stored schedule.
    pub fn into_technician(self) -> SalonResult<Technician> {
        let weekly_schedule: WeeklySchedule = serde_json::from_value(self.weekly_schedule.0)
            .map_err(|e| {
                SalonError::Validation(format!(
                    "Technician {} has a malformed weekly schedule: {}",
                    self.id, e
                ))
            })?;

        Ok(Technician {
            id: self.id,
            salon_id: self.salon_id,
            name: self.name,
            weekly_schedule,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub duration_minutes: i64,
    pub price_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<DbService> for SalonService {
    fn from(row: DbService) -> Self {
        Self {
            id: row.id,
            salon_id: row.salon_id,
            name: row.name,
            duration_minutes: row.duration_minutes,
            price_cents: row.price_cents,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub client_name: String,
    pub client_phone: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Self {
            id: row.id,
            salon_id: row.salon_id,
            technician_id: row.technician_id,
            client_name: row.client_name,
            client_phone: row.client_phone,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: row.created_at,
        }
    }
}

impl From<&DbAppointment> for ExistingAppointment {
    fn from(row: &DbAppointment) -> Self {
        Self {
            technician_id: row.technician_id,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

/// Values for a new appointment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub salon_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub client_name: String,
    pub client_phone: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
