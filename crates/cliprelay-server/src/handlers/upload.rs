use std::sync::Arc;

use axum::{extract::State, Json};
use cliprelay_core::models::{UploadRequest, UploadResponse};
use cliprelay_core::AppError;
use serde_json::json;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Upload clipboard content, replacing whatever the store currently holds.
///
/// Envelope well-formedness is enforced here: the kind must parse (the
/// `ValidatedJson` extractor already rejected unknown kinds), the content
/// must be non-empty, and the metadata must be a JSON object (a missing
/// metadata field is normalized to `{}`). The store itself never validates.
pub async fn upload_clipboard(
    State(state): State<Arc<AppState>>,
    ValidatedJson(mut envelope): ValidatedJson<UploadRequest>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    if envelope.content.is_empty() {
        return Err(AppError::InvalidInput("Content must not be empty".to_string()).into());
    }

    if envelope.metadata.is_null() {
        envelope.metadata = json!({});
    } else if !envelope.metadata.is_object() {
        return Err(AppError::InvalidInput("Metadata must be a JSON object".to_string()).into());
    }

    let receipt = state.store.replace(envelope).await;

    tracing::info!(
        kind = %receipt.kind,
        size = receipt.size,
        "stored clipboard envelope"
    );

    Ok(Json(UploadResponse {
        status: "success".to_string(),
        kind: receipt.kind,
        size: receipt.size,
        timestamp: receipt.timestamp,
    }))
}
