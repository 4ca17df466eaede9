//! # SalonSlot API
//!
//! The API crate provides the web server for the SalonSlot booking service: the salon
//! catalog, walk-in availability, and booking creation.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Load data through the repository and run the availability engine
//! - **Middleware**: Error to HTTP response mapping
//! - **Config**: Environment and application configuration
//!
//! Storage is reached only through [`SalonRepository`], and "now" only through
//! [`Clock`], so handlers can be exercised against mocks and a fixed time.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use salonslot_core::{availability::SlotPolicy, clock::Clock};
use salonslot_db::SalonRepository;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Technicians, services and appointments
    pub repository: Arc<dyn SalonRepository>,
    /// Source of "now" for availability and booking checks
    pub clock: Arc<dyn Clock>,
    /// Buffers, rounding and cadence of the availability engine
    pub slot_policy: SlotPolicy,
}

/// Builds the router with every endpoint attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Technicians and services
        .merge(routes::catalog::routes())
        // Walk-in availability
        .merge(routes::availability::routes())
        // Booking
        .merge(routes::appointments::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and storage
///
/// This function initializes logging, configures routes and middleware, and serves
/// HTTP until the process is stopped.
pub async fn start_server(
    config: config::ApiConfig,
    repository: Arc<dyn SalonRepository>,
    clock: Arc<dyn Clock>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(policy = ?config.slot_policy, "Availability engine configured");

    let state = Arc::new(ApiState {
        repository,
        clock,
        slot_policy: config.slot_policy,
    });
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(allowed)
        .allow_credentials(true)
}
