pub mod analysis_gate;
pub mod api_client;
pub mod media_service;
pub mod preview_service;
pub mod render_service;
