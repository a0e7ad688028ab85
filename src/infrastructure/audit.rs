//! Tracing-backed audit sink

use serde_json::Value;
use tracing::{error, info};

use crate::domain::audit::AuditSink;
use crate::domain::{InsightRecord, InsightStatus};

/// Audit sink that emits each record as a structured tracing event.
///
/// Successful generations log at INFO with the generated insights; failures
/// log at ERROR with the failure detail. Callers only ever see the generic
/// failure message, so this is where the underlying cause surfaces for
/// operators.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&self, record: InsightRecord) {
        match record.status() {
            InsightStatus::Success => {
                // tracing's field macros import their own `Value` into the
                // expansion, shadowing serde_json's, so build the value first.
                let insights = record.insights().unwrap_or(&Value::Null);
                info!(
                    record_id = %record.id(),
                    model_name = %record.model_name(),
                    model_revision = record.model_revision(),
                    elapsed_ms = record.elapsed_ms(),
                    insights = %insights,
                    "Generated insights"
                );
            }
            InsightStatus::Failed => {
                error!(
                    record_id = %record.id(),
                    model_name = %record.model_name(),
                    model_revision = record.model_revision(),
                    elapsed_ms = record.elapsed_ms(),
                    error = record.error().unwrap_or(""),
                    "Insight generation failed"
                );
            }
        }
    }
}
