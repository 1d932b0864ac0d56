pub mod envelope;
pub mod wire;

pub use envelope::{ContentKind, FileMetadata, ImageMetadata, TextMetadata};
pub use wire::{ClearResponse, DownloadResponse, StatusResponse, UploadRequest, UploadResponse};
