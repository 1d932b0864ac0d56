use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Content kind enum
///
/// Exactly one kind is active per envelope. The wire representation is the
/// lowercase name (`"text"`, `"file"`, `"image"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    File,
    Image,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::File => "file",
            ContentKind::Image => "image",
        }
    }

    /// Parse a wire kind string. Returns `None` for anything unrecognized;
    /// the caller decides how to report that (the server boundary rejects
    /// it, the materializer maps it to `UnknownContentType`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(ContentKind::Text),
            "file" => Some(ContentKind::File),
            "image" => Some(ContentKind::Image),
            _ => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_filename() -> String {
    "downloaded_file".to_string()
}

fn default_mime_type() -> String {
    "application/octet-stream".to_string()
}

fn default_image_format() -> String {
    "PNG".to_string()
}

/// Metadata for a text envelope. `length` is the character count of the
/// captured string, not its byte length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMetadata {
    pub length: u64,
}

/// Metadata for a file envelope. `size` is the decoded byte length; the
/// wire payload itself is base64 text.
///
/// Deserialization is lenient: a conforming encoder always writes every
/// key, but the materializer falls back to defaults rather than refusing
/// an envelope from an older peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default)]
    pub original_path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

/// Metadata for an image envelope. Images are always re-encoded to PNG
/// before transport, so `format` is `"PNG"` and `size` is the PNG byte
/// length. `dimensions` is a `"{width}x{height}"` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMetadata {
    #[serde(default = "default_image_format")]
    pub format: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub dimensions: String,
}

impl FileMetadata {
    pub fn from_value(value: &JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

impl ImageMetadata {
    pub fn from_value(value: &JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_kind_wire_names() {
        assert_eq!(
            serde_json::to_value(ContentKind::Text).unwrap(),
            json!("text")
        );
        assert_eq!(
            serde_json::to_value(ContentKind::File).unwrap(),
            json!("file")
        );
        assert_eq!(
            serde_json::to_value(ContentKind::Image).unwrap(),
            json!("image")
        );
    }

    #[test]
    fn content_kind_parse_rejects_unknown() {
        assert_eq!(ContentKind::parse("text"), Some(ContentKind::Text));
        assert_eq!(ContentKind::parse("video"), None);
        assert_eq!(ContentKind::parse("TEXT"), None);
        assert_eq!(ContentKind::parse(""), None);
    }

    #[test]
    fn file_metadata_roundtrip() {
        let meta = FileMetadata {
            filename: "report.pdf".to_string(),
            original_path: "/home/user/report.pdf".to_string(),
            size: 1024,
            mime_type: "application/pdf".to_string(),
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["filename"], "report.pdf");
        let parsed = FileMetadata::from_value(&value).unwrap();
        assert_eq!(parsed.filename, meta.filename);
        assert_eq!(parsed.size, 1024);
    }

    #[test]
    fn file_metadata_defaults_for_missing_keys() {
        let parsed = FileMetadata::from_value(&json!({})).unwrap();
        assert_eq!(parsed.filename, "downloaded_file");
        assert_eq!(parsed.mime_type, "application/octet-stream");
        assert_eq!(parsed.size, 0);
    }

    #[test]
    fn image_metadata_defaults() {
        let parsed = ImageMetadata::from_value(&json!({"dimensions": "640x480"})).unwrap();
        assert_eq!(parsed.format, "PNG");
        assert_eq!(parsed.dimensions, "640x480");
    }
}
