use crate::error::AppError;
use crate::models::predict_types::{RenderedVerdict, Verdict};

/// Score displayed as a percentage with two decimals, e.g. `87.00%`.
pub fn format_score_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Project a verdict into its display form: prediction label, formatted
/// probability-of-real, optional frame count, and a pretty-printed dump of
/// the full raw response.
pub fn render(verdict: &Verdict) -> Result<RenderedVerdict, AppError> {
    let raw_json = serde_json::to_string_pretty(verdict)?;

    Ok(RenderedVerdict {
        prediction: verdict.prediction.clone(),
        score: verdict.score,
        score_percent: format_score_percent(verdict.score),
        frames_sampled: verdict.frames_sampled,
        raw_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn verdict(prediction: &str, score: f64, frames: Option<u64>) -> Verdict {
        Verdict {
            prediction: prediction.to_string(),
            score,
            frames_sampled: frames,
            extra: Map::new(),
        }
    }

    #[test]
    fn score_formats_to_two_decimals() {
        assert_eq!(format_score_percent(0.87), "87.00%");
        assert_eq!(format_score_percent(0.5), "50.00%");
        assert_eq!(format_score_percent(0.123456), "12.35%");
        assert_eq!(format_score_percent(1.0), "100.00%");
        assert_eq!(format_score_percent(0.0), "0.00%");
    }

    #[test]
    fn rendered_output_contains_label_and_percentage() {
        let rendered = render(&verdict("real", 0.87, None)).unwrap();

        assert_eq!(rendered.prediction, "real");
        assert_eq!(rendered.score_percent, "87.00%");
        assert!(rendered.frames_sampled.is_none());
    }

    #[test]
    fn frame_count_is_present_only_when_sampled() {
        let with_frames = render(&verdict("fake", 0.2, Some(12))).unwrap();
        assert_eq!(with_frames.frames_sampled, Some(12));
        assert!(with_frames.raw_json.contains("frames_sampled"));

        let without = render(&verdict("fake", 0.2, None)).unwrap();
        assert!(without.frames_sampled.is_none());
        assert!(!without.raw_json.contains("frames_sampled"));
    }

    #[test]
    fn raw_dump_includes_passthrough_fields() {
        let mut v = verdict("real", 0.91, None);
        v.extra.insert("source".into(), serde_json::json!("heuristic"));
        v.extra.insert("mean_pixel".into(), serde_json::json!(140.25));

        let rendered = render(&v).unwrap();
        assert!(rendered.raw_json.contains("\"source\""));
        assert!(rendered.raw_json.contains("heuristic"));
        assert!(rendered.raw_json.contains("mean_pixel"));
    }
}
