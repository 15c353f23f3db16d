//! Verification log endpoint.

use axum::{Json, extract::State};

use doorstep_common::LogEntry;

use crate::state::AppState;

/// Full verification log, newest first, already bounded
pub async fn list(State(state): State<AppState>) -> Json<Vec<LogEntry>> {
    Json(state.log.entries().await)
}
