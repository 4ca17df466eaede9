//! # Catalog Handlers
//!
//! Technicians and services of a salon. Both are read by the availability and
//! booking handlers; creating them here is how a salon populates its catalog.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use salonslot_core::{
    errors::{SalonError, SalonResult},
    models::{
        service::{CreateServiceRequest, SalonService},
        technician::{CreateTechnicianRequest, Technician},
    },
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Loads every technician of a salon as domain models.
///
/// A stored schedule that no longer validates fails the whole request instead of
/// silently producing wrong slots.
pub(crate) async fn load_technicians(state: &ApiState, salon_id: Uuid) -> SalonResult<Vec<Technician>> {
    state
        .repository
        .get_technicians(salon_id)
        .await?
        .into_iter()
        .map(|row| row.into_technician())
        .collect()
}

pub(crate) async fn load_selected_services(
    state: &ApiState,
    salon_id: Uuid,
    service_ids: &[Uuid],
) -> SalonResult<Vec<SalonService>> {
    if service_ids.is_empty() {
        return Ok(Vec::new());
    }
    let services = state
        .repository
        .get_services_by_ids(salon_id, service_ids)
        .await?;
    Ok(services.into_iter().map(SalonService::from).collect())
}

#[axum::debug_handler]
pub async fn list_technicians(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
) -> Result<Json<Vec<Technician>>, AppError> {
    let technicians = load_technicians(&state, salon_id).await?;
    Ok(Json(technicians))
}

/// Creates a technician.
///
/// The body is decoded by hand so that a malformed weekly schedule is reported as a
/// regular validation error.
#[axum::debug_handler]
pub async fn create_technician(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Technician>), AppError> {
    let request: CreateTechnicianRequest = serde_json::from_value(payload)
        .map_err(|e| SalonError::Validation(format!("Invalid technician: {}", e)))?;
    request.validate()?;

    let created = state
        .repository
        .create_technician(salon_id, &request)
        .await?
        .into_technician()?;

    info!("Created technician {} for salon {}", created.id, salon_id);
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
) -> Result<Json<Vec<SalonService>>, AppError> {
    let services = state.repository.get_services(salon_id).await?;
    Ok(Json(services.into_iter().map(SalonService::from).collect()))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<SalonService>), AppError> {
    payload.validate()?;

    let created = state.repository.create_service(salon_id, &payload).await?;

    info!("Created service {} for salon {}", created.id, salon_id);
    Ok((StatusCode::CREATED, Json(created.into())))
}
