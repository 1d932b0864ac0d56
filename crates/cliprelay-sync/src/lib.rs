//! Client-side clipboard processing.
//!
//! The upload path classifies whatever is on the native clipboard into one
//! envelope ([`capture`]); the download path turns a fetched envelope back
//! into a native clipboard entry or a file on disk ([`materialize`]). Both
//! sides talk to the platform only through the
//! [`NativeClipboard`](cliprelay_platform::NativeClipboard) capability.

pub mod capture;
pub mod error;
pub mod materialize;
pub mod mime;
pub mod paths;

pub use capture::capture;
pub use error::{CaptureError, MaterializeError};
pub use materialize::{materialize, Materialized};
