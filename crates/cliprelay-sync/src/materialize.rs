//! Decoding and materialization for the download path.
//!
//! Each envelope kind has its own strategy; image materialization is an
//! explicit two-rung ladder: try the native image clipboard, and on any
//! failure fall back to writing a PNG file and copying its path as text.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose, Engine as _};
use cliprelay_core::models::{ContentKind, DownloadResponse, FileMetadata, ImageMetadata};
use cliprelay_platform::{ClipboardImage, NativeClipboard};

use crate::error::MaterializeError;
use crate::paths::next_available_path;

/// Basename used when an image has to be written to disk instead of the
/// native clipboard.
const IMAGE_FALLBACK_FILENAME: &str = "clipboard_image.png";

/// What materialization actually did, for user-facing reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Materialized {
    /// Text placed on the native clipboard.
    Text { chars: usize },
    /// File written to disk; its path was copied as text.
    File { path: PathBuf },
    /// Image placed directly on the native image clipboard.
    ImageClipboard { dimensions: String },
    /// Image written to disk after the clipboard rung failed; its path was
    /// copied as text.
    ImageFile { path: PathBuf },
}

/// Materialize a fetched envelope into the destination environment.
pub fn materialize(
    envelope: &DownloadResponse,
    clipboard: &dyn NativeClipboard,
    download_dir: &Path,
) -> Result<Materialized, MaterializeError> {
    if envelope.kind.is_empty() || envelope.content.is_empty() {
        return Err(MaterializeError::NoValidContent);
    }

    let kind = ContentKind::parse(&envelope.kind)
        .ok_or_else(|| MaterializeError::UnknownContentType(envelope.kind.clone()))?;

    match kind {
        ContentKind::Text => {
            clipboard.write_text(&envelope.content)?;
            Ok(Materialized::Text {
                chars: envelope.content.chars().count(),
            })
        }
        ContentKind::File => materialize_file(envelope, clipboard, download_dir),
        ContentKind::Image => materialize_image(envelope, clipboard, download_dir),
    }
}

fn materialize_file(
    envelope: &DownloadResponse,
    clipboard: &dyn NativeClipboard,
    download_dir: &Path,
) -> Result<Materialized, MaterializeError> {
    let bytes = general_purpose::STANDARD.decode(&envelope.content)?;
    let metadata = FileMetadata::from_value(&envelope.metadata)?;

    let path = write_download(download_dir, &metadata.filename, &bytes)?;
    clipboard.write_text(&path.display().to_string())?;

    tracing::info!(path = %path.display(), size = bytes.len(), "materialized file, path copied to clipboard");
    Ok(Materialized::File { path })
}

fn materialize_image(
    envelope: &DownloadResponse,
    clipboard: &dyn NativeClipboard,
    download_dir: &Path,
) -> Result<Materialized, MaterializeError> {
    let bytes = general_purpose::STANDARD.decode(&envelope.content)?;

    // Decode up front so corrupt payloads fail before any side effect.
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| MaterializeError::InvalidImage(e.to_string()))?;

    let metadata = ImageMetadata::from_value(&envelope.metadata)?;
    let dimensions = if metadata.dimensions.is_empty() {
        format!("{}x{}", decoded.width(), decoded.height())
    } else {
        metadata.dimensions
    };

    let clipboard_image = ClipboardImage {
        width: decoded.width(),
        height: decoded.height(),
        png_data: bytes,
    };

    match clipboard.write_image(&clipboard_image) {
        Ok(()) => Ok(Materialized::ImageClipboard { dimensions }),
        Err(e) => {
            tracing::debug!(error = %e, "image clipboard write failed, falling back to file");
            let path = write_download(
                download_dir,
                IMAGE_FALLBACK_FILENAME,
                &clipboard_image.png_data,
            )?;
            clipboard.write_text(&path.display().to_string())?;
            Ok(Materialized::ImageFile { path })
        }
    }
}

/// Write bytes under the download directory, creating it if missing and
/// applying the collision suffix policy. Returns the absolute path.
fn write_download(
    download_dir: &Path,
    filename: &str,
    bytes: &[u8],
) -> Result<PathBuf, MaterializeError> {
    fs::create_dir_all(download_dir)?;
    let path = next_available_path(download_dir, filename);
    fs::write(&path, bytes)?;
    Ok(path.canonicalize().unwrap_or(path))
}
