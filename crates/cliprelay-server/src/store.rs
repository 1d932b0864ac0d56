//! Single-slot clipboard store.
//!
//! The store owns exactly one optional envelope behind one RwLock: a replace
//! is atomic with respect to concurrent reads, and a rapid sequence of
//! replaces resolves to last-write-wins. Nothing is persisted; a restart
//! starts empty.

use chrono::{DateTime, Utc};
use cliprelay_core::models::{ContentKind, StatusResponse, UploadRequest};
use serde_json::Value as JsonValue;
use tokio::sync::RwLock;

/// The envelope currently occupying the slot.
#[derive(Debug, Clone)]
pub struct StoredEnvelope {
    pub kind: ContentKind,
    pub content: String,
    pub metadata: JsonValue,
    pub timestamp: DateTime<Utc>,
}

/// Acceptance receipt returned by [`ClipboardStore::replace`].
#[derive(Debug, Clone, Copy)]
pub struct Receipt {
    pub kind: ContentKind,
    /// Byte length of the stored wire payload.
    pub size: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
pub struct ClipboardStore {
    slot: RwLock<Option<StoredEnvelope>>,
}

impl ClipboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a well-formed envelope, stamping it with the current time and
    /// discarding whatever was stored before. Validation happens at the HTTP
    /// boundary; the store takes what it is given.
    pub async fn replace(&self, envelope: UploadRequest) -> Receipt {
        let timestamp = Utc::now();
        let receipt = Receipt {
            kind: envelope.kind,
            size: envelope.content.len() as u64,
            timestamp,
        };

        let mut slot = self.slot.write().await;
        *slot = Some(StoredEnvelope {
            kind: envelope.kind,
            content: envelope.content,
            metadata: envelope.metadata,
            timestamp,
        });

        receipt
    }

    /// The current envelope, or `None` when the slot is empty.
    pub async fn read(&self) -> Option<StoredEnvelope> {
        self.slot.read().await.clone()
    }

    /// Lightweight status without the payload. Does not mutate state.
    pub async fn peek(&self) -> StatusResponse {
        match self.slot.read().await.as_ref() {
            Some(envelope) => StatusResponse {
                has_data: true,
                kind: Some(envelope.kind),
                size: Some(envelope.content.len() as u64),
                metadata: Some(envelope.metadata.clone()),
                timestamp: Some(envelope.timestamp),
            },
            None => StatusResponse {
                has_data: false,
                kind: None,
                size: None,
                metadata: None,
                timestamp: None,
            },
        }
    }

    /// Reset the slot to empty. Idempotent: clearing an empty slot is fine.
    /// Returns whether an envelope was discarded.
    pub async fn clear(&self) -> bool {
        self.slot.write().await.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_envelope(content: &str) -> UploadRequest {
        UploadRequest {
            kind: ContentKind::Text,
            content: content.to_string(),
            metadata: json!({ "length": content.chars().count() }),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = ClipboardStore::new();
        assert!(store.read().await.is_none());
        assert!(!store.peek().await.has_data);
    }

    #[tokio::test]
    async fn replace_discards_previous_envelope() {
        let store = ClipboardStore::new();
        store.replace(text_envelope("first")).await;
        store.replace(text_envelope("second")).await;

        let stored = store.read().await.unwrap();
        assert_eq!(stored.content, "second");
    }

    #[tokio::test]
    async fn receipt_reports_payload_byte_size() {
        let store = ClipboardStore::new();
        let receipt = store.replace(text_envelope("héllo")).await;
        assert_eq!(receipt.kind, ContentKind::Text);
        // byte length of the wire payload, not the character count
        assert_eq!(receipt.size, 6);

        let status = store.peek().await;
        assert_eq!(status.size, Some(6));
        assert_eq!(status.timestamp, Some(receipt.timestamp));
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = ClipboardStore::new();
        store.replace(text_envelope("x")).await;

        assert!(store.clear().await);
        assert!(!store.clear().await);
        assert!(store.read().await.is_none());
    }
}
