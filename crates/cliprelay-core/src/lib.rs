//! Cliprelay Core Library
//!
//! This crate provides the envelope and wire models, error types, and
//! configuration shared by the cliprelay server and client components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{ClientConfig, ServerConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    ClearResponse, ContentKind, DownloadResponse, FileMetadata, ImageMetadata, StatusResponse,
    TextMetadata, UploadRequest, UploadResponse,
};
