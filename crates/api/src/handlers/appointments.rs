//! # Appointment Handlers
//!
//! Booking creation is the system of record. The slots a client saw may be stale,
//! so the requested start is checked again against a fresh snapshot of that day's
//! appointments before anything is written. Two bookings racing for the same time
//! can still both pass this check.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use salonslot_core::{
    availability::{check_booking, first_available_technician, BookingCandidate, BookingCheck},
    clock::day_bounds,
    errors::SalonError,
    models::{
        appointment::{Appointment, CreateAppointmentRequest, ExistingAppointment},
        service::ServiceSelection,
    },
};
use salonslot_db::models::NewAppointment;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    handlers::catalog::{load_selected_services, load_technicians},
    middleware::error_handling::AppError,
    ApiState,
};

/// Books an appointment
///
/// # Endpoint
///
/// ```text
/// POST /api/salons/:salon_id/appointments
/// ```
///
/// # Errors
///
/// * `SalonError::Validation` - bad request body, start in the past, or outside
///   working hours
/// * `SalonError::NotFound` - unknown technician or service
/// * `SalonError::Conflict` - the time was taken since the slots were listed
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    payload.validate()?;

    let technicians = load_technicians(&state, salon_id).await?;
    if let Some(id) = payload.technician_id {
        if !technicians.iter().any(|technician| technician.id == id) {
            return Err(SalonError::NotFound(format!("Technician with ID {} not found", id)).into());
        }
    }

    let selection = ServiceSelection::new(payload.service_ids.clone());
    let catalog = load_selected_services(&state, salon_id, &selection.service_ids).await?;
    let required_duration = selection.required_duration(&catalog)?;

    let now = state.clock.now();
    let local_start = payload.start_time.with_timezone(now.offset());
    let (day_start, day_end) = day_bounds(local_start.date_naive(), now.offset());
    let appointments: Vec<ExistingAppointment> = state
        .repository
        .get_appointments_between(salon_id, day_start, day_end)
        .await?
        .iter()
        .map(ExistingAppointment::from)
        .collect();

    let candidate = BookingCandidate {
        start: payload.start_time,
        required_duration,
        technician_id: payload.technician_id,
    };

    let rejection = match check_booking(
        &candidate,
        &technicians,
        &appointments,
        now,
        &state.slot_policy,
    ) {
        BookingCheck::Accepted => None,
        BookingCheck::NothingToSchedule => Some(SalonError::Validation(
            "Selected services have no duration".to_string(),
        )),
        BookingCheck::InPast => Some(SalonError::Validation(
            "Requested start time is in the past".to_string(),
        )),
        BookingCheck::OutsideWorkingHours => Some(SalonError::Validation(
            "Requested time is outside working hours".to_string(),
        )),
        BookingCheck::Conflict => Some(SalonError::Conflict(
            "Requested time is no longer available".to_string(),
        )),
    };
    if let Some(err) = rejection {
        warn!(%salon_id, start = %payload.start_time, "Booking rejected: {}", err);
        return Err(err.into());
    }

    if payload.technician_id.is_none() {
        let offset = *now.offset();
        if let Some(technician) = first_available_technician(
            &candidate,
            &technicians,
            &appointments,
            &offset,
            &state.slot_policy,
        ) {
            debug!(%salon_id, "Unassigned booking fits technician {}", technician.id);
        }
    }

    let created = state
        .repository
        .create_appointment(&NewAppointment {
            salon_id,
            technician_id: payload.technician_id,
            client_name: payload.client_name.trim().to_string(),
            client_phone: payload.client_phone.trim().to_string(),
            start_time: candidate.start,
            end_time: candidate.end(),
        })
        .await?;

    info!("Booked appointment {} for salon {}", created.id, salon_id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Lists today's appointments of a salon, earliest first
#[axum::debug_handler]
pub async fn list_today(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let now = state.clock.now();
    let (day_start, day_end) = day_bounds(now.date_naive(), now.offset());

    let appointments = state
        .repository
        .get_appointments_between(salon_id, day_start, day_end)
        .await?;

    Ok(Json(appointments.into_iter().map(Appointment::from).collect()))
}
