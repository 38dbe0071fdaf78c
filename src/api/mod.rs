//! API handlers for Bookcode REST endpoints

pub mod ccode;
pub mod health;
pub mod metadata;
pub mod openapi;
pub mod scan;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Barcode scanning
        .route("/scan", post(scan::scan))
        .route("/lookup", post(scan::lookup))
        // C-code decoding
        .route("/ccode/:code", get(ccode::decode_ccode))
        // Provider metadata
        .route("/isbn/:isbn/metadata", get(metadata::get_metadata))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
