use cliprelay_core::models::{ContentKind, UploadRequest};
use cliprelay_sync::Materialized;

/// One-line summary of an upload envelope for terminal output.
pub fn describe_upload(envelope: &UploadRequest) -> String {
    match envelope.kind {
        ContentKind::Text => {
            let length = envelope
                .metadata
                .get("length")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            format!("Uploaded text ({} characters)", length)
        }
        ContentKind::File => {
            let filename = envelope
                .metadata
                .get("filename")
                .and_then(|v| v.as_str())
                .unwrap_or("file");
            let size = envelope
                .metadata
                .get("size")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            format!("Uploaded file: {} ({} bytes)", filename, size)
        }
        ContentKind::Image => {
            let dimensions = envelope
                .metadata
                .get("dimensions")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown");
            let size = envelope
                .metadata
                .get("size")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            format!("Uploaded image ({}, {} bytes)", dimensions, size)
        }
    }
}

/// One-line summary of what `paste` did with the downloaded envelope.
pub fn describe_materialized(result: &Materialized) -> String {
    match result {
        Materialized::Text { chars } => {
            format!("Downloaded text to clipboard ({} characters)", chars)
        }
        Materialized::File { path } => {
            format!("Downloaded file: {} (path copied to clipboard)", path.display())
        }
        Materialized::ImageClipboard { dimensions } => {
            format!("Downloaded image to clipboard ({})", dimensions)
        }
        Materialized::ImageFile { path } => {
            format!(
                "Downloaded image to: {} (could not set clipboard directly, path copied instead)",
                path.display()
            )
        }
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn describe_text_upload() {
        let envelope = UploadRequest {
            kind: ContentKind::Text,
            content: "hello".to_string(),
            metadata: json!({ "length": 5 }),
        };
        assert_eq!(describe_upload(&envelope), "Uploaded text (5 characters)");
    }

    #[test]
    fn describe_file_upload() {
        let envelope = UploadRequest {
            kind: ContentKind::File,
            content: "aGk=".to_string(),
            metadata: json!({ "filename": "report.pdf", "size": 2 }),
        };
        assert_eq!(
            describe_upload(&envelope),
            "Uploaded file: report.pdf (2 bytes)"
        );
    }

    #[test]
    fn describe_upload_tolerates_missing_metadata() {
        let envelope = UploadRequest {
            kind: ContentKind::Image,
            content: "aGk=".to_string(),
            metadata: json!({}),
        };
        assert_eq!(describe_upload(&envelope), "Uploaded image (unknown, 0 bytes)");
    }

    #[test]
    fn describe_materialized_variants() {
        assert_eq!(
            describe_materialized(&Materialized::Text { chars: 7 }),
            "Downloaded text to clipboard (7 characters)"
        );
        assert_eq!(
            describe_materialized(&Materialized::ImageClipboard {
                dimensions: "800x600".to_string()
            }),
            "Downloaded image to clipboard (800x600)"
        );
        let summary = describe_materialized(&Materialized::File {
            path: PathBuf::from("/tmp/report.pdf"),
        });
        assert!(summary.contains("/tmp/report.pdf"));
        assert!(summary.contains("path copied"));
    }
}
