use std::path::PathBuf;

use cliprelay_platform::ClipboardError;

/// Upload-path failures. All are terminal for the invocation.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("No content found in clipboard")]
    NoContentAvailable,

    #[error("File not found: {}", .0.display())]
    SourceFileNotFound(PathBuf),

    #[error("Not a file: {}", .0.display())]
    SourceNotAFile(PathBuf),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Download-path failures.
///
/// `NoValidContent` and `UnknownContentType` are classification failures on
/// the fetched envelope itself; the remaining variants are decode/write
/// failures on content that classified fine.
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("No valid content received from server")]
    NoValidContent,

    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("Failed to decode payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to write download: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
