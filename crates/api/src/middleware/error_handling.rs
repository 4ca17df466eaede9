//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every endpoint
//! reports failures the same way: `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use salonslot_core::errors::SalonError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use salonslot_api::middleware::error_handling::AppError;
/// use salonslot_core::errors::SalonError;
///
/// async fn handler(name: String) -> Result<Json<String>, AppError> {
///     if name.is_empty() {
///         return Err(SalonError::Validation("name must not be empty".into()).into());
///     }
///     Ok(Json(name))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SalonError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SalonError::NotFound(_) => StatusCode::NOT_FOUND,
            SalonError::Validation(_) => StatusCode::BAD_REQUEST,
            SalonError::Conflict(_) => StatusCode::CONFLICT,
            SalonError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SalonError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `SalonResult` inside handlers.
impl From<SalonError> for AppError {
    fn from(err: SalonError) -> Self {
        AppError(err)
    }
}

/// Repository calls return `eyre::Result`; their failures are storage failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SalonError::Database(err))
    }
}
