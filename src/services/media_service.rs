use crate::error::AppError;
use crate::models::media_types::{MediaInfo, MediaKind};
use std::path::Path;

const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("tiff", "image/tiff"),
    ("tif", "image/tiff"),
];

const VIDEO_MIME_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
];

const FALLBACK_MIME: &str = "application/octet-stream";

/// Map a file path to its MIME type by extension. Unknown extensions fall
/// back to `application/octet-stream`.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_lowercase(),
        None => return FALLBACK_MIME,
    };

    for &(candidate, mime) in IMAGE_MIME_TYPES.iter().chain(VIDEO_MIME_TYPES) {
        if candidate == ext {
            return mime;
        }
    }
    FALLBACK_MIME
}

/// Classify by MIME type prefix: `image/*` and `video/*` get a preview
/// surface, anything else does not.
pub fn kind_for_mime(mime: &str) -> MediaKind {
    if mime.starts_with("image/") {
        MediaKind::Image
    } else if mime.starts_with("video/") {
        MediaKind::Video
    } else {
        MediaKind::Other
    }
}

pub fn inspect(path: &str) -> Result<MediaInfo, AppError> {
    let file_path = Path::new(path);
    if !file_path.is_file() {
        return Err(format!("File does not exist: {}", path).into());
    }

    let file_name = file_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let size = std::fs::metadata(file_path)
        .map_err(|e| AppError {
            message: format!("Cannot read metadata for {}: {}", path, e),
        })?
        .len();

    let mime = mime_for_path(file_path);

    Ok(MediaInfo {
        file_name,
        path: path.to_string(),
        kind: kind_for_mime(mime),
        mime: mime.to_string(),
        size,
    })
}
