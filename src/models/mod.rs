pub mod media_types;
pub mod predict_types;
