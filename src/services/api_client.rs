use crate::error::AppError;
use crate::models::media_types::MediaKind;
use crate::models::predict_types::{HealthStatus, Verdict};
use std::path::Path;

const BACKEND_BASE_URL: &str = "https://deepshield-premium.onrender.com";

/// Frame-sampling stride sent with every video submission.
const VIDEO_SAMPLE_RATE: u32 = 5;

/// Images go to the image endpoint; everything else goes down the video
/// path, matching the service contract.
pub fn endpoint_for(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "/predict-image",
        MediaKind::Video | MediaKind::Other => "/predict-video",
    }
}

/// The `sample_rate` form field accompanies every non-image submission.
pub fn sample_rate_field(kind: MediaKind) -> Option<(&'static str, String)> {
    match kind {
        MediaKind::Image => None,
        MediaKind::Video | MediaKind::Other => {
            Some(("sample_rate", VIDEO_SAMPLE_RATE.to_string()))
        }
    }
}

/// Non-2xx responses surface the body verbatim to the user.
pub fn server_error(body: &str) -> AppError {
    AppError {
        message: format!("Server error: {}", body),
    }
}

pub fn decode_verdict(value: serde_json::Value) -> Result<Verdict, AppError> {
    serde_json::from_value(value).map_err(|e| AppError {
        message: format!("Unexpected response from server: {}", e),
    })
}

/// Upload the file as multipart form data and decode the verdict.
///
/// No timeout is configured: a non-responding backend hangs the request, and
/// the caller's in-flight gate stays held until the connection dies.
pub async fn request_prediction(
    path: &Path,
    kind: MediaKind,
    mime: &str,
) -> Result<Verdict, AppError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| AppError {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime)?;

    let mut form = reqwest::multipart::Form::new().part("file", part);
    if let Some((name, value)) = sample_rate_field(kind) {
        form = form.text(name, value);
    }

    let url = format!("{}{}", BACKEND_BASE_URL, endpoint_for(kind));
    let client = reqwest::Client::new();
    let response = client.post(&url).multipart(form).send().await?;

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(server_error(&body));
    }

    let value: serde_json::Value = response.json().await?;
    decode_verdict(value)
}

/// Probe the backend's health endpoint. Unreachable or failing backends are
/// reported as a status, never as an error.
pub async fn check_health() -> HealthStatus {
    let client = reqwest::Client::new();
    let url = format!("{}/health", BACKEND_BASE_URL);

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            let status = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v["status"].as_str().map(str::to_string));
            HealthStatus {
                reachable: true,
                status,
            }
        }
        _ => HealthStatus {
            reachable: false,
            status: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_target_the_image_endpoint() {
        assert_eq!(endpoint_for(MediaKind::Image), "/predict-image");
        assert!(sample_rate_field(MediaKind::Image).is_none());
    }

    #[test]
    fn videos_target_the_video_endpoint_with_fixed_stride() {
        assert_eq!(endpoint_for(MediaKind::Video), "/predict-video");
        let (name, value) = sample_rate_field(MediaKind::Video).unwrap();
        assert_eq!(name, "sample_rate");
        assert_eq!(value, "5");
    }

    #[test]
    fn unclassified_files_follow_the_video_path() {
        assert_eq!(endpoint_for(MediaKind::Other), "/predict-video");
        assert!(sample_rate_field(MediaKind::Other).is_some());
    }

    #[test]
    fn decode_verdict_minimal_response() {
        let verdict = decode_verdict(serde_json::json!({
            "prediction": "real",
            "score": 0.87
        }))
        .unwrap();

        assert_eq!(verdict.prediction, "real");
        assert_eq!(verdict.score, 0.87);
        assert!(verdict.frames_sampled.is_none());
        assert!(verdict.extra.is_empty());
    }

    #[test]
    fn decode_verdict_keeps_passthrough_fields() {
        let verdict = decode_verdict(serde_json::json!({
            "prediction": "fake",
            "score": 0.12,
            "frames_sampled": 12,
            "source": "video_aggregate"
        }))
        .unwrap();

        assert_eq!(verdict.frames_sampled, Some(12));
        assert_eq!(verdict.extra["source"], "video_aggregate");
    }

    #[test]
    fn decode_verdict_rejects_missing_score() {
        let result = decode_verdict(serde_json::json!({ "prediction": "real" }));
        assert!(result.is_err());
    }

    #[test]
    fn decode_verdict_rejects_non_object_body() {
        assert!(decode_verdict(serde_json::json!("bad file")).is_err());
    }

    #[test]
    fn server_error_carries_the_body_verbatim() {
        let err = server_error("bad file");
        assert!(err.message.contains("bad file"));
    }
}
