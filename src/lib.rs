mod commands;
mod error;
mod models;
mod services;

use services::analysis_gate::AnalysisGate;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .setup(|app| {
            app.manage(AnalysisGate::new());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::media::inspect_media,
            commands::media::get_media_preview,
            commands::analyze::analyze_media,
            commands::analyze::check_backend_health,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
