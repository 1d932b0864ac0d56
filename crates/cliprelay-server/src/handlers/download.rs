use std::sync::Arc;

use axum::{extract::State, Json};
use cliprelay_core::models::DownloadResponse;
use cliprelay_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Download the current envelope, payload included. 404 when the store is
/// empty.
pub async fn download_clipboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DownloadResponse>, HttpAppError> {
    let envelope = state
        .store
        .read()
        .await
        .ok_or_else(|| AppError::NotFound("No clipboard data available".to_string()))?;

    tracing::info!(kind = %envelope.kind, "served clipboard envelope");

    Ok(Json(DownloadResponse {
        kind: envelope.kind.as_str().to_string(),
        content: envelope.content,
        metadata: envelope.metadata,
        timestamp: Some(envelope.timestamp),
    }))
}
