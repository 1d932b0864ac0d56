//! Wire contract between the clients and the store server.
//!
//! Upload parses `type` into [`ContentKind`] so an unrecognized kind dies at
//! the server boundary. Download deliberately carries `type` as a raw string:
//! the receiving materializer classifies it itself and reports
//! `UnknownContentType` for values it does not recognize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::envelope::ContentKind;

/// Body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Plain text for `text`, standard base64 for `file` and `image`.
    pub content: String,
    #[serde(default)]
    pub metadata: JsonValue,
}

/// Acceptance receipt returned by `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Byte length of the stored wire payload (base64 text for binary kinds).
    pub size: u64,
    pub timestamp: DateTime<Utc>,
}

/// Body of a 200 response from `GET /download`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(default)]
    pub metadata: JsonValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Body of `GET /status`. All fields beyond `has_data` are omitted when the
/// store is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub has_data: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Body of `DELETE /clear`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_request_parses_wire_shape() {
        let body = json!({
            "type": "text",
            "content": "hello",
            "metadata": { "length": 5 }
        });
        let request: UploadRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.kind, ContentKind::Text);
        assert_eq!(request.content, "hello");
        assert_eq!(request.metadata["length"], 5);
    }

    #[test]
    fn upload_request_rejects_unknown_kind() {
        let body = json!({ "type": "spreadsheet", "content": "x" });
        assert!(serde_json::from_value::<UploadRequest>(body).is_err());
    }

    #[test]
    fn upload_request_metadata_defaults_to_null() {
        let body = json!({ "type": "text", "content": "x" });
        let request: UploadRequest = serde_json::from_value(body).unwrap();
        assert!(request.metadata.is_null());
    }

    #[test]
    fn status_response_omits_empty_fields() {
        let status = StatusResponse {
            has_data: false,
            kind: None,
            size: None,
            metadata: None,
            timestamp: None,
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value, json!({ "has_data": false }));
    }

    #[test]
    fn download_response_keeps_kind_as_string() {
        let body = json!({
            "type": "hologram",
            "content": "...",
            "metadata": {},
            "timestamp": "2026-01-15T10:00:00Z"
        });
        let response: DownloadResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.kind, "hologram");
        assert!(response.timestamp.is_some());
    }

    #[test]
    fn upload_response_timestamp_is_iso8601() {
        let response = UploadResponse {
            status: "success".to_string(),
            kind: ContentKind::File,
            size: 42,
            timestamp: "2026-01-15T10:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "file");
        assert!(value["timestamp"]
            .as_str()
            .unwrap()
            .starts_with("2026-01-15T10:00:00"));
    }
}
