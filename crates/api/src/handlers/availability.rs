//! # Availability Handlers
//!
//! Serves the walk-in availability engine over HTTP.
//!
//! Everything the engine needs is loaded once per request: the salon's technicians,
//! the selected services (to sum their durations) and today's appointments. The
//! engine itself runs synchronously on that snapshot with "now" taken from the
//! injected clock.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use salonslot_core::{
    availability::generate_slots,
    clock::day_bounds,
    errors::{SalonError, SalonResult},
    models::{
        appointment::ExistingAppointment, service::ServiceSelection,
        time_slot::AvailabilityResponse,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::{
    handlers::catalog::{load_selected_services, load_technicians},
    middleware::error_handling::AppError,
    ApiState,
};

/// Query parameters for the availability endpoint
///
/// # Fields
///
/// * `service_ids` - Comma-separated list of service UUIDs
/// * `technician_id` - A specific technician; absent or empty means any available
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub service_ids: String,
    pub technician_id: Option<String>,
}

impl AvailabilityQuery {
    pub fn technician_id(&self) -> SalonResult<Option<Uuid>> {
        match self.technician_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Uuid::parse_str(raw).map(Some).map_err(|_| {
                SalonError::Validation(format!("Invalid technician ID format: {}", raw))
            }),
        }
    }
}

/// Lists the start times still open today for the selected services
///
/// # Endpoint
///
/// ```text
/// GET /api/salons/:salon_id/availability?service_ids=uuid1,uuid2&technician_id=uuid3
/// ```
///
/// # Errors
///
/// * `SalonError::Validation` - malformed service or technician IDs
/// * `SalonError::NotFound` - unknown technician or service
/// * `SalonError::Database` - storage failure
///
/// "No availability" is not an error: the response simply has no slots.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let selection = ServiceSelection::parse(&query.service_ids)?;
    let technician_id = query.technician_id()?;

    if selection.is_empty() {
        return Ok(Json(AvailabilityResponse {
            required_duration_minutes: 0,
            slots: Vec::new(),
        }));
    }

    let technicians = load_technicians(&state, salon_id).await?;
    if let Some(id) = technician_id {
        if !technicians.iter().any(|technician| technician.id == id) {
            return Err(SalonError::NotFound(format!("Technician with ID {} not found", id)).into());
        }
    }

    let catalog = load_selected_services(&state, salon_id, &selection.service_ids).await?;
    let required_duration = selection.required_duration(&catalog)?;

    let now = state.clock.now();
    let (day_start, day_end) = day_bounds(now.date_naive(), now.offset());
    let appointments: Vec<ExistingAppointment> = state
        .repository
        .get_appointments_between(salon_id, day_start, day_end)
        .await?
        .iter()
        .map(ExistingAppointment::from)
        .collect();

    debug!(
        %salon_id,
        ?technician_id,
        required_duration,
        appointments = appointments.len(),
        "Computing availability"
    );

    let slots = generate_slots(
        &appointments,
        technician_id,
        required_duration,
        &technicians,
        now,
        &state.slot_policy,
    );

    Ok(Json(AvailabilityResponse {
        required_duration_minutes: required_duration,
        slots,
    }))
}
