//! Audit records for insight generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Generated identifier for an insight audit record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InsightRecordId(String);

impl InsightRecordId {
    pub fn generate() -> Self {
        Self(format!("ins-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InsightRecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one model invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
    Success,
    Failed,
}

impl InsightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightStatus::Success => "success",
            InsightStatus::Failed => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InsightStatus::Success)
    }
}

impl std::fmt::Display for InsightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One audit entry per model invocation.
///
/// Success entries carry the generated insights; failure entries carry the
/// failure detail that is withheld from the caller-facing error. The model
/// revision records which registration generation produced the entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRecord {
    id: InsightRecordId,
    model_name: String,
    model_revision: u32,
    status: InsightStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    elapsed_ms: u64,
    created_at: DateTime<Utc>,
}

impl InsightRecord {
    pub fn success(
        model_name: impl Into<String>,
        model_revision: u32,
        insights: Value,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            id: InsightRecordId::generate(),
            model_name: model_name.into(),
            model_revision,
            status: InsightStatus::Success,
            insights: Some(insights),
            error: None,
            elapsed_ms,
            created_at: Utc::now(),
        }
    }

    pub fn failed(
        model_name: impl Into<String>,
        model_revision: u32,
        error: impl Into<String>,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            id: InsightRecordId::generate(),
            model_name: model_name.into(),
            model_revision,
            status: InsightStatus::Failed,
            insights: None,
            error: Some(error.into()),
            elapsed_ms,
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> &InsightRecordId {
        &self.id
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn model_revision(&self) -> u32 {
        self.model_revision
    }

    pub fn status(&self) -> InsightStatus {
        self.status
    }

    pub fn insights(&self) -> Option<&Value> {
        self.insights.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_record_id_prefix() {
        let id = InsightRecordId::generate();
        assert!(id.as_str().starts_with("ins-"));
    }

    #[test]
    fn test_success_record() {
        let record = InsightRecord::success("trend", 1, json!({"slope": 0.4}), 12);

        assert_eq!(record.model_name(), "trend");
        assert_eq!(record.model_revision(), 1);
        assert!(record.status().is_success());
        assert_eq!(record.insights(), Some(&json!({"slope": 0.4})));
        assert!(record.error().is_none());
        assert_eq!(record.elapsed_ms(), 12);
    }

    #[test]
    fn test_failed_record() {
        let record = InsightRecord::failed("churn", 3, "series too short", 2);

        assert_eq!(record.model_name(), "churn");
        assert_eq!(record.model_revision(), 3);
        assert_eq!(record.status(), InsightStatus::Failed);
        assert_eq!(record.error(), Some("series too short"));
        assert!(record.insights().is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(InsightStatus::Success.to_string(), "success");
        assert_eq!(InsightStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_record_serialization_skips_empty_fields() {
        let record = InsightRecord::failed("trend", 1, "bad input", 1);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["status"], json!("failed"));
        assert_eq!(value["error"], json!("bad input"));
        assert!(value.get("insights").is_none());
    }
}
