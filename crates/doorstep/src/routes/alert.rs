//! Visitor alert endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use doorstep_common::AlertState;

use crate::state::AppState;

#[derive(Serialize)]
pub struct RaiseResponse {
    message: &'static str,
    time: String,
}

/// Visitor pressed the bell: flag the owner
pub async fn raise(
    State(state): State<AppState>,
) -> Result<Json<RaiseResponse>, StatusCode> {
    let time = state
        .alerts
        .raise()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(RaiseResponse {
        message: "Owner alerted",
        time,
    }))
}

/// Owner polls for a pending visitor
pub async fn check(State(state): State<AppState>) -> Json<AlertState> {
    Json(state.alerts.check().await)
}

#[derive(Serialize)]
pub struct ClearedResponse {
    cleared: bool,
}

/// Owner acknowledged the visitor
pub async fn clear(
    State(state): State<AppState>,
) -> Result<Json<ClearedResponse>, StatusCode> {
    state
        .alerts
        .clear()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(ClearedResponse { cleared: true }))
}
