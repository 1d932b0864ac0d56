//! Raw re-materialization endpoints.
//!
//! `GET /download/file` and `GET /download/image` return the decoded binary
//! directly with a `Content-Disposition` built from the stored metadata, so
//! a browser can fetch the payload without speaking the base64 envelope.
//! 404 when the store is empty or holds a different kind.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose, Engine as _};
use cliprelay_core::models::{ContentKind, FileMetadata};
use cliprelay_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::store::StoredEnvelope;

pub async fn download_file_raw(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let envelope = stored_kind(&state, ContentKind::File, "No file available").await?;

    let metadata = FileMetadata::from_value(&envelope.metadata).map_err(|e| {
        tracing::error!(error = %e, "stored file metadata failed to parse");
        AppError::Internal(e.to_string())
    })?;

    let bytes = decode_payload(&envelope)?;
    tracing::info!(filename = %metadata.filename, size = bytes.len(), "served raw file");

    binary_response(bytes, &metadata.mime_type, &metadata.filename)
}

pub async fn download_image_raw(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let envelope = stored_kind(&state, ContentKind::Image, "No image available").await?;

    let bytes = decode_payload(&envelope)?;
    tracing::info!(size = bytes.len(), "served raw image");

    // Images are always stored in the canonical PNG transport format.
    binary_response(bytes, "image/png", "clipboard_image.png")
}

async fn stored_kind(
    state: &AppState,
    kind: ContentKind,
    not_found: &str,
) -> Result<StoredEnvelope, HttpAppError> {
    let envelope = state
        .store
        .read()
        .await
        .ok_or_else(|| AppError::NotFound(not_found.to_string()))?;

    if envelope.kind != kind {
        return Err(AppError::NotFound(not_found.to_string()).into());
    }

    Ok(envelope)
}

fn decode_payload(envelope: &StoredEnvelope) -> Result<Vec<u8>, HttpAppError> {
    general_purpose::STANDARD
        .decode(&envelope.content)
        .map_err(|e| {
            tracing::error!(error = %e, kind = %envelope.kind, "stored payload is not valid base64");
            AppError::Internal(format!("Stored payload is not valid base64: {}", e)).into()
        })
}

fn binary_response(
    bytes: Vec<u8>,
    content_type: &str,
    filename: &str,
) -> Result<Response, HttpAppError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(bytes))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            AppError::Internal(e.to_string()).into()
        })
}
