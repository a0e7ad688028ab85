//! Trend analysis reference model
//!
//! Fits a least-squares line through a numeric series and classifies the
//! overall direction.

use serde_json::{Value, json};

use super::series::extract_series;
use crate::domain::{BoxError, DataPayload, InsightModel};

/// Slopes within this band count as flat
const FLAT_TOLERANCE: f64 = 1e-9;

/// Insight model that classifies a numeric series as rising, falling or flat
#[derive(Debug, Clone)]
pub struct TrendModel {
    series_field: String,
    min_points: usize,
}

impl TrendModel {
    /// Create a trend model reading the `values` field with default settings
    pub fn new() -> Self {
        Self {
            series_field: "values".to_string(),
            min_points: 2,
        }
    }

    /// Create a trend model reading a custom payload field
    pub fn with_series_field(field: impl Into<String>) -> Self {
        Self {
            series_field: field.into(),
            ..Self::new()
        }
    }

    /// Create a trend model requiring a custom minimum number of points
    pub fn with_min_points(min_points: usize) -> Self {
        Self {
            min_points,
            ..Self::new()
        }
    }
}

impl Default for TrendModel {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightModel for TrendModel {
    fn predict(&self, payload: &DataPayload) -> Result<Value, BoxError> {
        // A line needs at least two points regardless of configuration.
        let required = self.min_points.max(2);
        let series = extract_series(payload, &self.series_field, required)?;

        let slope = least_squares_slope(&series);
        let trend = if slope.abs() <= FLAT_TOLERANCE {
            "flat"
        } else if slope > 0.0 {
            "rising"
        } else {
            "falling"
        };

        Ok(json!({
            "trend": trend,
            "slope": slope,
            "samples": series.len(),
        }))
    }
}

/// Slope of the least-squares line through `(0, y0), (1, y1), ...`
fn least_squares_slope(series: &[f64]) -> f64 {
    let n = series.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = series.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (index, value) in series.iter().enumerate() {
        let dx = index as f64 - mean_x;
        numerator += dx * (value - mean_y);
        denominator += dx * dx;
    }

    numerator / denominator
}
