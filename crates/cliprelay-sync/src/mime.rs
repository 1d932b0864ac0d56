//! Extension to MIME type mapping for file envelopes.

use std::path::Path;

/// Derive a MIME type from a path's extension. Unknown or missing
/// extensions map to `application/octet-stream`.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        // Images
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        // Videos
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("flac") => "audio/flac",
        // Documents and text
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("html") | Some("htm") => "text/html",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        // Archives
        Some("zip") => "application/zip",
        Some("tar") => "application/x-tar",
        Some("gz") => "application/gzip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(mime_type_for_path(Path::new("report.pdf")), "application/pdf");
        assert_eq!(mime_type_for_path(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(mime_type_for_path(Path::new("/a/b/archive.tar")), "application/x-tar");
    }

    #[test]
    fn unknown_or_missing_extension_is_octet_stream() {
        assert_eq!(
            mime_type_for_path(Path::new("binary.xyz123")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_type_for_path(Path::new("Makefile")),
            "application/octet-stream"
        );
    }
}
