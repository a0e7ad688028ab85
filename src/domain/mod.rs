//! Domain layer - Core business logic and entities

pub mod audit;
pub mod error;
pub mod insight;

pub use audit::AuditSink;
pub use audit::in_memory::InMemoryAuditSink;
pub use error::{BoxError, InsightError};
pub use insight::{
    DataPayload, InsightGenerator, InsightModel, InsightRecord, InsightRecordId, InsightReport,
    InsightStatus, MAX_MODEL_NAME_LENGTH, ModelEntry, ModelName, ModelNameError, ModelRegistry,
    payload_from_json, validate_model_name,
};
