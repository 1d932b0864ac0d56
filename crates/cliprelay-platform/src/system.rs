//! System clipboard backed by clipboard-rs.
//!
//! clipboard-rs does not distinguish "nothing of that kind on the clipboard"
//! from a read failure, so read errors are treated as absence (logged at
//! debug) and the priority dispatch falls through to the next kind. Write
//! failures are always surfaced.

use std::path::PathBuf;
use std::sync::Mutex;

use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, RustImageData};

use crate::{ClipboardError, ClipboardImage, NativeClipboard};

pub struct SystemClipboard {
    // ClipboardContext is not Sync; serialize all access through one lock.
    inner: Mutex<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let context = ClipboardContext::new().map_err(|e| {
            ClipboardError::Unavailable(format!("failed to open clipboard context: {}", e))
        })?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ClipboardContext>, ClipboardError> {
        self.inner
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))
    }
}

impl NativeClipboard for SystemClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let guard = self.lock()?;
        match guard.get_text() {
            Ok(text) if !text.is_empty() => Ok(Some(text)),
            Ok(_) => Ok(None),
            Err(e) => {
                tracing::debug!(error = %e, "no text on clipboard");
                Ok(None)
            }
        }
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let guard = self.lock()?;
        guard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(format!("failed to write text: {}", e)))
    }

    fn read_file_refs(&self) -> Result<Vec<PathBuf>, ClipboardError> {
        let guard = self.lock()?;
        match guard.get_files() {
            Ok(files) => Ok(files
                .iter()
                .map(|f| PathBuf::from(strip_file_scheme(f)))
                .collect()),
            Err(e) => {
                tracing::debug!(error = %e, "no file references on clipboard");
                Ok(Vec::new())
            }
        }
    }

    fn read_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
        let guard = self.lock()?;
        let image = match guard.get_image() {
            Ok(image) => image,
            Err(e) => {
                tracing::debug!(error = %e, "no image on clipboard");
                return Ok(None);
            }
        };

        let (width, height) = image.get_size();
        let png = image
            .to_png()
            .map_err(|e| ClipboardError::Read(format!("failed to encode image as PNG: {}", e)))?;

        Ok(Some(ClipboardImage {
            width,
            height,
            png_data: png.get_bytes().to_vec(),
        }))
    }

    fn write_image(&self, image: &ClipboardImage) -> Result<(), ClipboardError> {
        let guard = self.lock()?;
        let data = RustImageData::from_bytes(&image.png_data)
            .map_err(|e| ClipboardError::Write(format!("failed to decode image: {}", e)))?;
        guard
            .set_image(data)
            .map_err(|e| ClipboardError::Write(format!("failed to write image: {}", e)))
    }
}

/// Some backends hand file references back as `file://` URIs.
fn strip_file_scheme(reference: &str) -> &str {
    reference.strip_prefix("file://").unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_file_scheme_prefix() {
        assert_eq!(strip_file_scheme("file:///tmp/a.txt"), "/tmp/a.txt");
        assert_eq!(strip_file_scheme("/tmp/a.txt"), "/tmp/a.txt");
        assert_eq!(strip_file_scheme("C:\\tmp\\a.txt"), "C:\\tmp\\a.txt");
    }
}
