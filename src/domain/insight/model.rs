use std::fmt::Debug;

use serde_json::Value;

use super::DataPayload;
use crate::domain::BoxError;

/// Capability required of every registered insight model.
///
/// A model takes a processed-data payload and produces a prediction value.
/// How that happens is entirely the model's business: the dispatcher never
/// inspects model internals and treats every failure uniformly.
pub trait InsightModel: Send + Sync + Debug {
    /// Produce a prediction for the payload.
    ///
    /// Implementations may fail with any error type; the dispatcher records
    /// the detail and surfaces a generic processing failure to its caller.
    fn predict(&self, payload: &DataPayload) -> Result<Value, BoxError>;
}
