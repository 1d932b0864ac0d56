//! Route configuration and setup.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    clear_clipboard, clipboard_status, download_clipboard, download_file_raw, download_image_raw,
    health_check, upload_clipboard,
};
use crate::state::AppState;

/// Setup all application routes
pub fn build_router(state: Arc<AppState>) -> Router {
    // All endpoints are unauthenticated; CORS is fully open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_content_bytes = state.config.max_content_bytes;

    Router::new()
        .route("/", get(health_check))
        .route("/upload", post(upload_clipboard))
        .route("/download", get(download_clipboard))
        .route("/download/file", get(download_file_raw))
        .route("/download/image", get(download_image_raw))
        .route("/status", get(clipboard_status))
        .route("/clear", delete(clear_clipboard))
        .layer(RequestBodyLimitLayer::new(max_content_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
