use thiserror::Error;

/// Boxed error produced by an insight model's prediction capability.
///
/// Models may fail with any error type; the dispatcher treats them uniformly.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by insight dispatch
#[derive(Debug, Error)]
pub enum InsightError {
    /// The requested model name is not present in the registry.
    #[error("Unknown insight model: {name}")]
    UnknownModel { name: String },

    /// The model's prediction capability failed.
    ///
    /// The message stays generic; the original cause is preserved through
    /// [`std::error::Error::source`] and the failure detail is captured once
    /// in the audit trail.
    #[error("Insight generation failed")]
    ProcessingFailed {
        #[source]
        source: BoxError,
    },
}

impl InsightError {
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    pub fn processing_failed(source: impl Into<BoxError>) -> Self {
        Self::ProcessingFailed {
            source: source.into(),
        }
    }

    /// True if this error means the registry had no entry for the name.
    pub fn is_unknown_model(&self) -> bool {
        matches!(self, Self::UnknownModel { .. })
    }
}
