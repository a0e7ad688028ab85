//! Model name newtype and validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length for model names
pub const MAX_MODEL_NAME_LENGTH: usize = 64;

/// Pattern for valid model names (alphanumeric with interior hyphens or
/// underscores; separators cannot lead or trail)
static MODEL_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_-]*[a-zA-Z0-9]$|^[a-zA-Z0-9]$").unwrap()
});

/// Model name validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelNameError {
    #[error("Model name cannot be empty")]
    Empty,

    #[error("Model name too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },

    #[error(
        "Invalid model name '{name}': must be alphanumeric with interior hyphens or underscores"
    )]
    InvalidFormat { name: String },
}

/// Registry key identifying an insight model.
///
/// Construction validates; a `ModelName` in hand is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelName(String);

impl ModelName {
    /// Create a new ModelName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, ModelNameError> {
        let name = name.into();
        validate_model_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModelName {
    type Error = ModelNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelName> for String {
    fn from(name: ModelName) -> Self {
        name.0
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a model name
pub fn validate_model_name(name: &str) -> Result<(), ModelNameError> {
    if name.is_empty() {
        return Err(ModelNameError::Empty);
    }

    if name.len() > MAX_MODEL_NAME_LENGTH {
        return Err(ModelNameError::TooLong {
            length: name.len(),
            max: MAX_MODEL_NAME_LENGTH,
        });
    }

    if !MODEL_NAME_PATTERN.is_match(name) {
        return Err(ModelNameError::InvalidFormat {
            name: name.to_string(),
        });
    }

    Ok(())
}
