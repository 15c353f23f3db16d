//! Verification code endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use doorstep_common::VerifyOutcome;

use crate::state::AppState;

#[derive(Serialize)]
pub struct RequestCodeResponse {
    message: &'static str,
    code: String,
}

/// Owner issues a fresh code for the visitor at the door
pub async fn request(
    State(state): State<AppState>,
) -> Result<Json<RequestCodeResponse>, StatusCode> {
    let code = state
        .codes
        .issue()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(RequestCodeResponse {
        message: "Code generated",
        code,
    }))
}

#[derive(Serialize)]
pub struct CurrentCodeResponse {
    /// Active code, null when none exists or it expired
    code: Option<String>,
}

/// The active code, for the owner page
pub async fn current(State(state): State<AppState>) -> Json<CurrentCodeResponse> {
    Json(CurrentCodeResponse {
        code: state.codes.current().await,
    })
}

#[derive(Deserialize)]
pub struct VerifyRequest {
    /// Code entered at the door; missing field counts as an empty entry
    #[serde(default)]
    code: String,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    result: VerifyOutcome,
}

/// Visitor enters a code; the attempt is always logged
pub async fn verify(
    State(state): State<AppState>,
    Json(payload): Json<VerifyRequest>,
) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        result: state.verify_code(&payload.code).await,
    })
}
