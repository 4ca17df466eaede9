use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SalonError, SalonResult};

/// Longest duration a single service may have, one full day.
pub const MAX_SERVICE_DURATION_MINUTES: i64 = 24 * 60;

/// A bookable service from the salon's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonService {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub duration_minutes: i64,
    pub price_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub duration_minutes: i64,
    pub price_cents: Option<i64>,
}

impl CreateServiceRequest {
    pub fn validate(&self) -> SalonResult<()> {
        if self.name.trim().is_empty() {
            return Err(SalonError::Validation("Service name must not be empty".to_string()));
        }
        if self.duration_minutes <= 0 || self.duration_minutes > MAX_SERVICE_DURATION_MINUTES {
            return Err(SalonError::Validation(format!(
                "Service duration must be between 1 and {} minutes, got {}",
                MAX_SERVICE_DURATION_MINUTES, self.duration_minutes
            )));
        }
        if matches!(self.price_cents, Some(price) if price < 0) {
            return Err(SalonError::Validation("Service price must not be negative".to_string()));
        }
        Ok(())
    }
}

/// The services a client picked for one appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub service_ids: Vec<Uuid>,
}

impl ServiceSelection {
    pub fn new(service_ids: Vec<Uuid>) -> Self {
        Self { service_ids }
    }

    /// Parses a comma-separated list of service UUIDs. Blank entries are skipped.
    pub fn parse(raw: &str) -> SalonResult<Self> {
        let service_ids = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Uuid::parse_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| {
                SalonError::Validation(
                    "Invalid service ID format. Must be comma-separated UUIDs".to_string(),
                )
            })?;
        Ok(Self { service_ids })
    }

    pub fn is_empty(&self) -> bool {
        self.service_ids.is_empty()
    }

    /// Sum of the durations of every selected service, in minutes.
    ///
    /// Selecting the same service twice counts it twice. An empty selection is 0.
    pub fn required_duration(&self, catalog: &[SalonService]) -> SalonResult<i64> {
        let durations: HashMap<Uuid, i64> = catalog
            .iter()
            .map(|service| (service.id, service.duration_minutes))
            .collect();

        self.service_ids.iter().try_fold(0i64, |total, id| {
            let minutes = durations
                .get(id)
                .ok_or_else(|| SalonError::NotFound(format!("Service with ID {} not found", id)))?;
            total.checked_add(*minutes).ok_or_else(|| {
                SalonError::Validation("Selected services are too long to schedule".to_string())
            })
        })
    }
}
