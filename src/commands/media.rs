use crate::error::AppError;
use crate::models::media_types::{MediaInfo, MediaKind, MediaPreview};
use crate::services::{media_service, preview_service};
use std::path::Path;

#[tauri::command]
pub fn inspect_media(path: String) -> Result<MediaInfo, AppError> {
    media_service::inspect(&path)
}

#[tauri::command]
pub fn get_media_preview(path: String) -> Result<MediaPreview, AppError> {
    let info = media_service::inspect(&path)?;

    let preview = match info.kind {
        MediaKind::Image => MediaPreview {
            kind: info.kind,
            image_data_url: Some(preview_service::image_preview_data_url(Path::new(&path))?),
            video_path: None,
        },
        MediaKind::Video => MediaPreview {
            kind: info.kind,
            image_data_url: None,
            video_path: Some(info.path),
        },
        // No preview surface for unsupported types; the frontend hides both.
        MediaKind::Other => MediaPreview {
            kind: info.kind,
            image_data_url: None,
            video_path: None,
        },
    };

    Ok(preview)
}
