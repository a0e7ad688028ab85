//! Insight report returned by dispatch

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a successful dispatch: the model's prediction output, unmodified,
/// under the single `generated_insights` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub generated_insights: Value,
}

impl InsightReport {
    pub fn new(generated_insights: Value) -> Self {
        Self { generated_insights }
    }

    /// Consume the report, yielding the model's raw output.
    pub fn into_inner(self) -> Value {
        self.generated_insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_wraps_value_unchanged() {
        let value = json!({"score": 0.9, "drivers": ["price", "volume"]});
        let report = InsightReport::new(value.clone());

        assert_eq!(report.generated_insights, value);
        assert_eq!(report.into_inner(), value);
    }

    #[test]
    fn test_report_serializes_to_single_field() {
        let report = InsightReport::new(json!({"score": 0.9}));
        let serialized = serde_json::to_value(&report).unwrap();

        assert_eq!(serialized, json!({"generated_insights": {"score": 0.9}}));

        let object = serialized.as_object().unwrap();
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn test_report_round_trip() {
        let report = InsightReport::new(json!([1, 2, 3]));
        let json = serde_json::to_string(&report).unwrap();
        let back: InsightReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back, report);
    }
}
