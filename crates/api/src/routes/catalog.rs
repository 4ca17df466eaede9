use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/salons/:salon_id/technicians",
            get(handlers::catalog::list_technicians).post(handlers::catalog::create_technician),
        )
        .route(
            "/api/salons/:salon_id/services",
            get(handlers::catalog::list_services).post(handlers::catalog::create_service),
        )
}
