//! Cliprelay Server Library
//!
//! This crate provides the HTTP handlers, the single-slot clipboard store,
//! and the application setup for the relay server.

mod handlers;

pub mod error;
pub mod setup;
pub mod state;
pub mod store;

// Re-exports
pub use error::ErrorResponse;
pub use store::{ClipboardStore, Receipt, StoredEnvelope};
