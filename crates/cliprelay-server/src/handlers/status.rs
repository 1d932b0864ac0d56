use std::sync::Arc;

use axum::{extract::State, Json};
use cliprelay_core::models::StatusResponse;

use crate::state::AppState;

/// Lightweight status of the stored envelope, without the payload.
pub async fn clipboard_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(state.store.peek().await)
}
