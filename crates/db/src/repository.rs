//! Storage seam used by the HTTP layer.
//!
//! Handlers talk to [`SalonRepository`] rather than the free functions in
//! [`crate::repositories`] so tests can swap in `MockSalonRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use mockall::automock;
use salonslot_core::models::{service::CreateServiceRequest, technician::CreateTechnicianRequest};
use uuid::Uuid;

use crate::{
    models::{DbAppointment, DbService, DbTechnician, NewAppointment},
    repositories, DbPool,
};

#[automock]
#[async_trait]
pub trait SalonRepository: Send + Sync {
    async fn create_technician(
        &self,
        salon_id: Uuid,
        request: &CreateTechnicianRequest,
    ) -> Result<DbTechnician>;

    /// Technicians of a salon in a stable order, oldest first.
    async fn get_technicians(&self, salon_id: Uuid) -> Result<Vec<DbTechnician>>;

    async fn create_service(
        &self,
        salon_id: Uuid,
        request: &CreateServiceRequest,
    ) -> Result<DbService>;

    async fn get_services(&self, salon_id: Uuid) -> Result<Vec<DbService>>;

    /// Only services that exist in the salon are returned; missing ids are skipped.
    async fn get_services_by_ids(&self, salon_id: Uuid, service_ids: &[Uuid])
        -> Result<Vec<DbService>>;

    async fn create_appointment(&self, appointment: &NewAppointment) -> Result<DbAppointment>;

    async fn get_appointments_between(
        &self,
        salon_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DbAppointment>>;
}

/// [`SalonRepository`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgSalonRepository {
    pool: DbPool,
}

impl PgSalonRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl SalonRepository for PgSalonRepository {
    async fn create_technician(
        &self,
        salon_id: Uuid,
        request: &CreateTechnicianRequest,
    ) -> Result<DbTechnician> {
        repositories::technician::create_technician(
            &self.pool,
            salon_id,
            &request.name,
            &request.weekly_schedule,
        )
        .await
    }

    async fn get_technicians(&self, salon_id: Uuid) -> Result<Vec<DbTechnician>> {
        repositories::technician::get_technicians_by_salon_id(&self.pool, salon_id).await
    }

    async fn create_service(
        &self,
        salon_id: Uuid,
        request: &CreateServiceRequest,
    ) -> Result<DbService> {
        repositories::service::create_service(
            &self.pool,
            salon_id,
            &request.name,
            request.duration_minutes,
            request.price_cents,
        )
        .await
    }

    async fn get_services(&self, salon_id: Uuid) -> Result<Vec<DbService>> {
        repositories::service::get_services_by_salon_id(&self.pool, salon_id).await
    }

    async fn get_services_by_ids(
        &self,
        salon_id: Uuid,
        service_ids: &[Uuid],
    ) -> Result<Vec<DbService>> {
        repositories::service::get_services_by_ids(&self.pool, salon_id, service_ids).await
    }

    async fn create_appointment(&self, appointment: &NewAppointment) -> Result<DbAppointment> {
        repositories::appointment::create_appointment(&self.pool, appointment).await
    }

    async fn get_appointments_between(
        &self,
        salon_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DbAppointment>> {
        repositories::appointment::get_appointments_between(&self.pool, salon_id, from, to).await
    }
}
