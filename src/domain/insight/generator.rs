//! Insight generator - routes data payloads to named insight models

use std::sync::Arc;
use std::time::Instant;

use super::{DataPayload, InsightModel, InsightRecord, InsightReport, ModelName, ModelRegistry};
use crate::domain::InsightError;
use crate::domain::audit::AuditSink;

/// Model registry and dispatcher.
///
/// Owns the mapping from model name to model instance and routes each
/// generation request to the named model, recording every invocation through
/// the injected audit sink. Registration mutates (`&mut self`) while dispatch
/// only reads, so a host that wants registration concurrent with dispatch
/// must bring its own synchronization.
#[derive(Debug)]
pub struct InsightGenerator {
    registry: ModelRegistry,
    audit: Arc<dyn AuditSink>,
}

impl InsightGenerator {
    /// Create a generator with an empty registry and the given audit sink.
    pub fn new(audit: Arc<dyn AuditSink>) -> Self {
        Self {
            registry: ModelRegistry::new(),
            audit,
        }
    }

    /// Register a model for insight generation, overwriting any model
    /// previously registered under the same name.
    pub fn register(&mut self, name: ModelName, model: Arc<dyn InsightModel>) {
        self.registry.register(name, model);
    }

    /// Generate insights for a payload using the named model.
    ///
    /// Fails with [`InsightError::UnknownModel`] when the name was never
    /// registered (no model runs, nothing is recorded). Otherwise the model's
    /// prediction capability is invoked exactly once: on success the result is
    /// returned unmodified under `generated_insights` and a success record is
    /// written to the audit sink; on failure the detail goes to the audit
    /// sink and the caller sees the generic
    /// [`InsightError::ProcessingFailed`].
    pub fn generate(
        &self,
        payload: &DataPayload,
        model_name: &str,
    ) -> Result<InsightReport, InsightError> {
        let entry = self
            .registry
            .get(model_name)
            .ok_or_else(|| InsightError::unknown_model(model_name))?;

        let started = Instant::now();

        match entry.model().predict(payload) {
            Ok(insights) => {
                self.audit.record(InsightRecord::success(
                    model_name,
                    entry.revision(),
                    insights.clone(),
                    elapsed_ms(started),
                ));

                Ok(InsightReport::new(insights))
            }
            Err(source) => {
                self.audit.record(InsightRecord::failed(
                    model_name,
                    entry.revision(),
                    source.to_string(),
                    elapsed_ms(started),
                ));

                Err(InsightError::ProcessingFailed { source })
            }
        }
    }

    /// Check whether a model name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// All registered model names
    pub fn model_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Current registration revision for a name, if registered
    pub fn revision_of(&self, name: &str) -> Option<u32> {
        self.registry.get(name).map(|entry| entry.revision())
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
