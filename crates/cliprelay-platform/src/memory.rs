//! In-memory clipboard for tests and headless environments.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::{ClipboardError, ClipboardImage, NativeClipboard};

#[derive(Default)]
struct Slots {
    text: Option<String>,
    image: Option<ClipboardImage>,
    file_refs: Vec<PathBuf>,
}

/// A process-local [`NativeClipboard`]. Holds each kind in its own slot so
/// tests can stage any combination of content, and can be configured to
/// refuse image writes to exercise the materializer's fallback ladder.
#[derive(Default)]
pub struct MemoryClipboard {
    slots: Mutex<Slots>,
    reject_image_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose `write_image` always reports the capability as
    /// unavailable, like a session without an image pasteboard.
    pub fn without_image_support() -> Self {
        Self {
            slots: Mutex::new(Slots::default()),
            reject_image_writes: true,
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.slots().text = Some(text.into());
    }

    pub fn set_image(&self, image: ClipboardImage) {
        self.slots().image = Some(image);
    }

    pub fn set_file_refs(&self, refs: Vec<PathBuf>) {
        self.slots().file_refs = refs;
    }

    pub fn text(&self) -> Option<String> {
        self.slots().text.clone()
    }

    pub fn image(&self) -> Option<ClipboardImage> {
        self.slots().image.clone()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NativeClipboard for MemoryClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.slots().text.clone().filter(|t| !t.is_empty()))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.slots().text = Some(text.to_string());
        Ok(())
    }

    fn read_file_refs(&self) -> Result<Vec<PathBuf>, ClipboardError> {
        Ok(self.slots().file_refs.clone())
    }

    fn read_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
        Ok(self.slots().image.clone())
    }

    fn write_image(&self, image: &ClipboardImage) -> Result<(), ClipboardError> {
        if self.reject_image_writes {
            return Err(ClipboardError::Unavailable(
                "image clipboard not supported".to_string(),
            ));
        }
        self.slots().image = Some(image.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_roundtrip() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.read_text().unwrap(), None);
        clipboard.write_text("hello").unwrap();
        assert_eq!(clipboard.read_text().unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn empty_text_reads_as_absent() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_text("");
        assert_eq!(clipboard.read_text().unwrap(), None);
    }

    #[test]
    fn image_write_can_be_rejected() {
        let clipboard = MemoryClipboard::without_image_support();
        let image = ClipboardImage {
            width: 1,
            height: 1,
            png_data: vec![0x89],
        };
        let err = clipboard.write_image(&image).unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }
}
