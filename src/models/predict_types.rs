use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful response from the prediction endpoints. `prediction` and
/// `score` are the contract; everything else the server sends rides along in
/// `extra` and is displayed verbatim, never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub prediction: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_sampled: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display-ready projection of a [`Verdict`] returned to the frontend.
#[derive(Debug, Serialize, Clone)]
pub struct RenderedVerdict {
    pub prediction: String,
    pub score: f64,
    pub score_percent: String,
    pub frames_sampled: Option<u64>,
    pub raw_json: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct HealthStatus {
    pub reachable: bool,
    pub status: Option<String>,
}
