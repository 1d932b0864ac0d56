use std::sync::Arc;

use axum::{extract::State, Json};
use cliprelay_core::models::ClearResponse;

use crate::state::AppState;

/// Clear the stored envelope. Idempotent: clearing an empty store succeeds
/// silently.
pub async fn clear_clipboard(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
    let discarded = state.store.clear().await;
    tracing::info!(discarded, "clipboard cleared");

    Json(ClearResponse {
        status: "success".to_string(),
        message: "Clipboard data cleared".to_string(),
    })
}
