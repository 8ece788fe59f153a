use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

#[derive(Debug, Serialize, Clone)]
pub struct MediaInfo {
    pub file_name: String,
    pub path: String,
    pub kind: MediaKind,
    pub mime: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Clone)]
pub struct MediaPreview {
    pub kind: MediaKind,
    pub image_data_url: Option<String>,
    pub video_path: Option<String>,
}
