//! Native clipboard capability interface.
//!
//! All platform-specific pasteboard access goes through [`NativeClipboard`];
//! the classification and materialization logic never touches an OS API
//! directly. [`SystemClipboard`] is the production implementation,
//! [`MemoryClipboard`] a process-local one for tests and headless targets.

mod memory;
mod system;

use std::path::PathBuf;

pub use memory::MemoryClipboard;
pub use system::SystemClipboard;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The capability is missing on this platform or session (e.g. no
    /// display server). Callers may fall back to another strategy.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard read failed: {0}")]
    Read(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// An image held by (or destined for) the native clipboard, already in the
/// canonical PNG transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl ClipboardImage {
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Polymorphic access to the system-wide copy/paste buffer.
///
/// Read operations distinguish "that kind of content is not present"
/// (`Ok(None)` / empty list) from an actual platform failure (`Err`), so the
/// caller's priority dispatch can fall through cleanly.
pub trait NativeClipboard: Send + Sync {
    fn read_text(&self) -> Result<Option<String>, ClipboardError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// File-system references currently on the clipboard, if any. Returns an
    /// empty list when the clipboard holds no file references.
    fn read_file_refs(&self) -> Result<Vec<PathBuf>, ClipboardError>;

    fn read_image(&self) -> Result<Option<ClipboardImage>, ClipboardError>;

    fn write_image(&self, image: &ClipboardImage) -> Result<(), ClipboardError>;
}
