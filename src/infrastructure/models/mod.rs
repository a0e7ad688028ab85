//! Builtin reference models
//!
//! Ready-made `InsightModel` implementations for common analyses over
//! numeric series payloads, plus a helper that registers them under their
//! well-known names.

mod pattern;
mod series;
mod trend;

pub use pattern::ThresholdPatternModel;
pub use series::SeriesError;
pub use trend::TrendModel;

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{InsightGenerator, InsightModel, ModelName, ModelNameError};

/// Name the builtin trend model is registered under
pub const TREND_ANALYSIS: &str = "trend_analysis";

/// Name the builtin pattern model is registered under
pub const PATTERN_RECOGNITION: &str = "pattern_recognition";

/// Register the builtin reference models on a generator under their
/// well-known names.
pub fn register_builtin_models(
    generator: &mut InsightGenerator,
) -> Result<(), ModelNameError> {
    let builtins: [(&str, Arc<dyn InsightModel>); 2] = [
        (TREND_ANALYSIS, Arc::new(TrendModel::new())),
        (PATTERN_RECOGNITION, Arc::new(ThresholdPatternModel::new())),
    ];

    info!(count = builtins.len(), "Registering builtin insight models");

    for (model_name, model) in builtins {
        generator.register(ModelName::new(model_name)?, model);
        debug!(model_name, "Registered builtin model");
    }

    Ok(())
}
