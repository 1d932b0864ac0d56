//! Content classification and encoding for the upload path.
//!
//! The native clipboard is probed in a fixed priority order, first match
//! wins: file references, then raster image data, then text. The result is
//! exactly one upload envelope; the clipboard itself is never mutated here.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use cliprelay_core::models::{ContentKind, FileMetadata, ImageMetadata, TextMetadata, UploadRequest};
use cliprelay_platform::{ClipboardImage, NativeClipboard};

use crate::error::CaptureError;
use crate::mime::mime_type_for_path;

/// Classify the current clipboard content and build the upload envelope.
pub fn capture(clipboard: &dyn NativeClipboard) -> Result<UploadRequest, CaptureError> {
    let file_refs = clipboard.read_file_refs()?;
    if let Some(first) = file_refs.first() {
        tracing::debug!(path = %first.display(), refs = file_refs.len(), "clipboard holds file references");
        return encode_file(first);
    }

    if let Some(image) = clipboard.read_image()? {
        tracing::debug!(dimensions = %image.dimensions(), "clipboard holds raster image");
        return encode_image(&image);
    }

    if let Some(text) = clipboard.read_text()? {
        tracing::debug!(chars = text.chars().count(), "clipboard holds text");
        return encode_text(&text);
    }

    Err(CaptureError::NoContentAvailable)
}

/// Build a file envelope from a path (the first clipboard file reference).
pub fn encode_file(path: &Path) -> Result<UploadRequest, CaptureError> {
    if !path.exists() {
        return Err(CaptureError::SourceFileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CaptureError::SourceNotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();
    let original_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    let metadata = FileMetadata {
        filename,
        original_path: original_path.display().to_string(),
        size: bytes.len() as u64,
        mime_type: mime_type_for_path(path).to_string(),
    };

    Ok(UploadRequest {
        kind: ContentKind::File,
        content: general_purpose::STANDARD.encode(&bytes),
        metadata: serde_json::to_value(&metadata)?,
    })
}

fn encode_image(image: &ClipboardImage) -> Result<UploadRequest, CaptureError> {
    let metadata = ImageMetadata {
        format: "PNG".to_string(),
        size: image.png_data.len() as u64,
        dimensions: image.dimensions(),
    };

    Ok(UploadRequest {
        kind: ContentKind::Image,
        content: general_purpose::STANDARD.encode(&image.png_data),
        metadata: serde_json::to_value(&metadata)?,
    })
}

fn encode_text(text: &str) -> Result<UploadRequest, CaptureError> {
    let metadata = TextMetadata {
        length: text.chars().count() as u64,
    };

    Ok(UploadRequest {
        kind: ContentKind::Text,
        content: text.to_string(),
        metadata: serde_json::to_value(&metadata)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliprelay_platform::MemoryClipboard;
    use std::io::Write;

    fn png_fixture() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn empty_clipboard_yields_no_content() {
        let clipboard = MemoryClipboard::new();
        let err = capture(&clipboard).unwrap_err();
        assert!(matches!(err, CaptureError::NoContentAvailable));
    }

    #[test]
    fn text_capture_counts_characters_not_bytes() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_text("héllo"); // 5 chars, 6 bytes

        let envelope = capture(&clipboard).unwrap();
        assert_eq!(envelope.kind, ContentKind::Text);
        assert_eq!(envelope.content, "héllo");
        assert_eq!(envelope.metadata["length"], 5);
    }

    #[test]
    fn file_reference_beats_image_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("data.bin");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"payload").unwrap();

        let clipboard = MemoryClipboard::new();
        clipboard.set_file_refs(vec![file_path.clone()]);
        clipboard.set_image(ClipboardImage {
            width: 2,
            height: 3,
            png_data: png_fixture(),
        });
        clipboard.set_text("also some text");

        let envelope = capture(&clipboard).unwrap();
        assert_eq!(envelope.kind, ContentKind::File);
        assert_eq!(envelope.metadata["filename"], "data.bin");
        assert_eq!(envelope.metadata["size"], 7);
        assert_eq!(
            general_purpose::STANDARD.decode(&envelope.content).unwrap(),
            b"payload"
        );
    }

    #[test]
    fn image_beats_text() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_image(ClipboardImage {
            width: 2,
            height: 3,
            png_data: png_fixture(),
        });
        clipboard.set_text("caption");

        let envelope = capture(&clipboard).unwrap();
        assert_eq!(envelope.kind, ContentKind::Image);
        assert_eq!(envelope.metadata["format"], "PNG");
        assert_eq!(envelope.metadata["dimensions"], "2x3");
    }

    #[test]
    fn missing_file_reference_is_an_error() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_file_refs(vec!["/does/not/exist.txt".into()]);

        let err = capture(&clipboard).unwrap_err();
        assert!(matches!(err, CaptureError::SourceFileNotFound(_)));
    }

    #[test]
    fn directory_reference_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let clipboard = MemoryClipboard::new();
        clipboard.set_file_refs(vec![dir.path().to_path_buf()]);

        let err = capture(&clipboard).unwrap_err();
        assert!(matches!(err, CaptureError::SourceNotAFile(_)));
    }

    #[test]
    fn file_mime_type_derived_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("slides.pdf");
        std::fs::write(&file_path, b"%PDF-").unwrap();

        let clipboard = MemoryClipboard::new();
        clipboard.set_file_refs(vec![file_path]);

        let envelope = capture(&clipboard).unwrap();
        assert_eq!(envelope.metadata["mime_type"], "application/pdf");
    }
}
