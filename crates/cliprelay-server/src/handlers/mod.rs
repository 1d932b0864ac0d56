mod clear;
mod download;
mod health;
mod raw_download;
mod status;
mod upload;

pub use clear::clear_clipboard;
pub use download::download_clipboard;
pub use health::health_check;
pub use raw_download::{download_file_raw, download_image_raw};
pub use status::clipboard_status;
pub use upload::upload_clipboard;
