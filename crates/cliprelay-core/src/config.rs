//! Configuration module
//!
//! Environment-driven configuration for the client binaries and the store
//! server. Defaults match the documented wire contract: server on port 8000,
//! downloads under `~/Downloads/cliprelay`.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

// Common constants
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONTENT_BYTES: usize = 64 * 1024 * 1024;
const DOWNLOAD_SUBDIR: &str = "cliprelay";

/// Client-side configuration (upload and download paths).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the store server, no trailing slash.
    pub server_url: String,
    /// Directory where downloaded files are materialized.
    pub download_dir: PathBuf,
}

impl ClientConfig {
    /// Read configuration from `CLIPRELAY_SERVER_URL` and
    /// `CLIPRELAY_DOWNLOAD_DIR`, falling back to the defaults.
    pub fn from_env() -> Self {
        let server_url = env::var("CLIPRELAY_SERVER_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let download_dir = env::var("CLIPRELAY_DOWNLOAD_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_download_dir);

        Self {
            server_url: normalize_base_url(&server_url),
            download_dir,
        }
    }
}

/// Server-side configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for an upload request body, enforced at the HTTP layer.
    pub max_content_bytes: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let host = env::var("CLIPRELAY_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("CLIPRELAY_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid CLIPRELAY_PORT: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let max_content_bytes = match env::var("CLIPRELAY_MAX_CONTENT_BYTES") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("Invalid CLIPRELAY_MAX_CONTENT_BYTES: {}", raw))?,
            Err(_) => DEFAULT_MAX_CONTENT_BYTES,
        };

        Ok(Self {
            host,
            port,
            max_content_bytes,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Strip trailing slashes so path concatenation stays predictable.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn default_download_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Downloads")
        .join(DOWNLOAD_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8000"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url("http://relay.example//"),
            "http://relay.example"
        );
    }

    #[test]
    fn default_download_dir_ends_with_subdir() {
        let dir = default_download_dir();
        assert!(dir.ends_with("Downloads/cliprelay") || dir.ends_with("cliprelay"));
    }
}
