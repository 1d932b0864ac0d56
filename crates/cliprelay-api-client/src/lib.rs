//! HTTP client for the cliprelay store server.
//!
//! A thin typed wrapper over the wire contract. Errors are an enum rather
//! than an opaque chain because callers present "cannot reach the server at
//! {url}" and "nothing to download" very differently from a generic HTTP
//! failure.

use std::time::Duration;

use cliprelay_core::config::normalize_base_url;
use cliprelay_core::models::{ClearResponse, DownloadResponse, StatusResponse, UploadRequest, UploadResponse};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Cannot connect to server at {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The store is empty (HTTP 404 on a download path).
    #[error("No clipboard data available on server")]
    NoData,

    #[error("Server returned {status}: {message}")]
    Http { status: StatusCode, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// HTTP client for the store server.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload an envelope, replacing the server's current slot.
    pub async fn upload(&self, envelope: &UploadRequest) -> Result<UploadResponse> {
        let url = self.build_url("/upload");
        let response = self
            .client
            .post(&url)
            .json(envelope)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        self.parse_response(response).await
    }

    /// Fetch the current envelope. `NoData` when the store is empty.
    pub async fn download(&self) -> Result<DownloadResponse> {
        let url = self.build_url("/download");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NoData);
        }

        self.parse_response(response).await
    }

    /// Lightweight status of the server's slot.
    pub async fn status(&self) -> Result<StatusResponse> {
        let url = self.build_url("/status");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        self.parse_response(response).await
    }

    /// Clear the server's slot. Succeeds even when already empty.
    pub async fn clear(&self) -> Result<ClearResponse> {
        let url = self.build_url("/clear");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        self.parse_response(response).await
    }

    fn classify_send_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_connect() || error.is_timeout() {
            ClientError::Connect {
                url: self.base_url.clone(),
                source: error,
            }
        } else {
            ClientError::Request(error)
        }
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Http { status, message });
        }

        Ok(response.json().await?)
    }
}
