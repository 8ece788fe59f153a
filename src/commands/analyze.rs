use crate::error::AppError;
use crate::models::predict_types::{HealthStatus, RenderedVerdict};
use crate::services::analysis_gate::AnalysisGate;
use crate::services::{api_client, media_service, render_service};
use std::path::Path;
use tauri::State;

#[tauri::command]
pub async fn analyze_media(
    gate: State<'_, AnalysisGate>,
    path: String,
) -> Result<RenderedVerdict, AppError> {
    if path.is_empty() {
        return Err("Please select an image or video file".into());
    }

    // Resolve MIME and kind before touching the network.
    let info = media_service::inspect(&path)?;

    // Held until this command returns, on every exit path.
    let _guard = gate.try_begin()?;

    let verdict = api_client::request_prediction(Path::new(&path), info.kind, &info.mime).await?;

    render_service::render(&verdict)
}

#[tauri::command]
pub async fn check_backend_health() -> Result<HealthStatus, AppError> {
    Ok(api_client::check_health().await)
}
