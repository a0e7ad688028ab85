//! Pattern recognition reference model
//!
//! Flags entries of a numeric series whose z-score exceeds a configurable
//! threshold.

use serde_json::{Value, json};

use super::series::extract_series;
use crate::domain::{BoxError, DataPayload, InsightModel};

/// Insight model that marks statistical outliers in a numeric series
#[derive(Debug, Clone)]
pub struct ThresholdPatternModel {
    series_field: String,
    threshold: f64,
    min_points: usize,
}

impl ThresholdPatternModel {
    /// Create a pattern model reading the `values` field with a z-score
    /// threshold of 2.0
    pub fn new() -> Self {
        Self {
            series_field: "values".to_string(),
            threshold: 2.0,
            min_points: 2,
        }
    }

    /// Create a pattern model with a custom z-score threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::new()
        }
    }

    /// Create a pattern model reading a custom payload field
    pub fn with_series_field(field: impl Into<String>) -> Self {
        Self {
            series_field: field.into(),
            ..Self::new()
        }
    }
}

impl Default for ThresholdPatternModel {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightModel for ThresholdPatternModel {
    fn predict(&self, payload: &DataPayload) -> Result<Value, BoxError> {
        let required = self.min_points.max(2);
        let series = extract_series(payload, &self.series_field, required)?;

        let n = series.len() as f64;
        let mean = series.iter().sum::<f64>() / n;
        let variance = series.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        // Zero spread means every point sits on the mean, so nothing sticks out.
        let outliers: Vec<Value> = if std_dev > 0.0 {
            series
                .iter()
                .enumerate()
                .filter_map(|(index, value)| {
                    let score = (value - mean) / std_dev;
                    (score.abs() > self.threshold).then(|| {
                        json!({
                            "index": index,
                            "value": value,
                            "score": score,
                        })
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(json!({
            "outliers": outliers,
            "mean": mean,
            "std_dev": std_dev,
        }))
    }
}
