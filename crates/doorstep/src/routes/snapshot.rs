//! Snapshot upload and retrieval endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    saved: bool,
    file: String,
    b64: String,
}

#[derive(Serialize)]
pub struct UploadError {
    saved: bool,
    error: String,
}

/// Store an uploaded camera snapshot (raw image bytes in the body)
pub async fn upload(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UploadResponse>, (StatusCode, Json<UploadError>)> {
    match state.snapshots.save(&body).await {
        Ok(saved) => Ok(Json(UploadResponse {
            saved: true,
            file: saved.file,
            b64: saved.data_uri,
        })),
        Err(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let message = match err {
                doorstep_common::Error::NoData => "no-data".to_string(),
                other => other.to_string(),
            };
            Err((
                status,
                Json(UploadError {
                    saved: false,
                    error: message,
                }),
            ))
        }
    }
}

#[derive(Serialize)]
pub struct LatestResponse {
    img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

/// Most recent snapshot as a data URI, or `{img: null}`
pub async fn latest(State(state): State<AppState>) -> Json<LatestResponse> {
    match state.snapshots.latest().await {
        Some(snap) => Json(LatestResponse {
            img: Some(snap.data_uri),
            file: Some(snap.file),
        }),
        None => Json(LatestResponse {
            img: None,
            file: None,
        }),
    }
}

#[derive(Serialize)]
pub struct ClearedResponse {
    cleared: bool,
}

/// Forget the latest-snapshot pointer (files stay on disk)
pub async fn clear(State(state): State<AppState>) -> Json<ClearedResponse> {
    state.snapshots.forget().await;
    Json(ClearedResponse { cleared: true })
}
