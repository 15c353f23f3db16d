//! HTTP route handlers for Doorstep.

use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod alert;
mod code;
mod health;
mod logs;
mod snapshot;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir).to_path_buf();

    Router::new()
        // Snapshot endpoints
        .route("/api/visitor_snapshot", post(snapshot::upload))
        .route("/api/get_snapshot", get(snapshot::latest))
        .route("/api/clear_snapshot", post(snapshot::clear))

        // Alert endpoints
        .route("/api/visitor_request", post(alert::raise))
        .route("/api/check_requests", get(alert::check))
        .route("/api/clear_requests", post(alert::clear))

        // Verification code endpoints
        .route("/api/request_code", post(code::request))
        .route("/api/get_code", get(code::current))
        .route("/api/verify_code", post(code::verify))

        // Verification log
        .route("/api/get_logs", get(logs::list))

        // Health & Status
        .route("/health", get(health::health_check))

        // Frontend pages (camera pages may load from another LAN origin)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/owner", ServeFile::new(static_dir.join("owner.html")))
        .fallback_service(ServeDir::new(static_dir))

        // Layers & shared state
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
