//! PMP Insight Engine
//!
//! A registry and dispatcher for named insight models:
//! - Register any [`InsightModel`] under a validated name; re-registering a
//!   name replaces the previous model
//! - Dispatch data payloads to the model registered under a name and get the
//!   generated insights back as an [`InsightReport`]
//! - Every model invocation is recorded through a pluggable audit sink
//! - Builtin trend analysis and pattern recognition reference models
//!
//! ```
//! use std::sync::Arc;
//!
//! use pmp_insight_engine::{InsightGenerator, InMemoryAuditSink, TrendModel, ModelName};
//! use serde_json::json;
//!
//! let mut generator = InsightGenerator::new(Arc::new(InMemoryAuditSink::new()));
//! generator.register(ModelName::new("trend")?, Arc::new(TrendModel::new()));
//!
//! let payload = pmp_insight_engine::payload_from_json(json!({"values": [1, 2, 3]}))
//!     .ok_or("payload must be a JSON object")?;
//! let report = generator.generate(&payload, "trend")?;
//!
//! assert_eq!(report.generated_insights["trend"], "rising");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    AuditSink, BoxError, DataPayload, InMemoryAuditSink, InsightError, InsightGenerator,
    InsightModel, InsightRecord, InsightReport, InsightStatus, ModelName, ModelNameError,
    payload_from_json,
};
pub use infrastructure::audit::TracingAuditSink;
pub use infrastructure::models::{
    PATTERN_RECOGNITION, TREND_ANALYSIS, ThresholdPatternModel, TrendModel,
    register_builtin_models,
};

use std::sync::Arc;

/// Build an [`InsightGenerator`] wired to the tracing-backed audit sink, with
/// the builtin reference models registered.
pub fn build_generator() -> InsightGenerator {
    let mut generator = InsightGenerator::new(Arc::new(TracingAuditSink::new()));

    if let Err(error) = register_builtin_models(&mut generator) {
        tracing::error!(error = %error, "Failed to register builtin models");
    }

    generator
}
