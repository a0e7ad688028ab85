//! Insight domain - named models, dispatch and audit records

mod generator;
mod model;
mod name;
mod payload;
mod record;
mod registry;
mod report;

pub use generator::InsightGenerator;
pub use model::InsightModel;
pub use name::{MAX_MODEL_NAME_LENGTH, ModelName, ModelNameError, validate_model_name};
pub use payload::{DataPayload, payload_from_json};
pub use record::{InsightRecord, InsightRecordId, InsightStatus};
pub use registry::{ModelEntry, ModelRegistry};
pub use report::InsightReport;

#[cfg(test)]
pub use model::mock::MockInsightModel;
