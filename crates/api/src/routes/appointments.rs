use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/salons/:salon_id/appointments",
            post(handlers::appointments::create_appointment),
        )
        .route(
            "/api/salons/:salon_id/appointments/today",
            get(handlers::appointments::list_today),
        )
}
