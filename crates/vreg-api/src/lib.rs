//! vreg-api - REST API layer for the vehicle registry
//!
//! This crate provides the HTTP layer over [`vreg_core::VehicleStore`].
//!
//! # Usage
//!
//! ```ignore
//! use vreg_api::{create_router, AppState};
//!
//! let state = AppState::new();
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the vehicle registry router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Vehicle collection routes
        .route(
            "/vehicle",
            get(handlers::vehicles::list_vehicles).post(handlers::vehicles::create_vehicle),
        )
        // Single-record routes, keyed by VIN
        .route(
            "/vehicle/{vin}",
            get(handlers::vehicles::get_vehicle)
                .put(handlers::vehicles::update_vehicle)
                .delete(handlers::vehicles::delete_vehicle),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
