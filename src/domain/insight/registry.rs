//! Model registry - named insight model instances

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{InsightModel, ModelName};

/// Entry in the model registry
#[derive(Debug)]
pub struct ModelEntry {
    /// The registered model instance
    model: Arc<dyn InsightModel>,

    /// Registration generation for this name (1 for the first registration,
    /// incremented each time the name is overwritten)
    revision: u32,

    /// When this entry was registered
    registered_at: DateTime<Utc>,
}

impl ModelEntry {
    pub fn model(&self) -> &dyn InsightModel {
        self.model.as_ref()
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

/// Mapping from model name to registered model.
///
/// Last registration for a name wins; there is no duplicate detection. The
/// registry is a plain owned map - callers that need concurrent access wrap
/// their owner in their own synchronization.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    entries: HashMap<String, ModelEntry>,
}

impl ModelRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a model under a name, overwriting any prior entry.
    ///
    /// Returns the revision assigned to this registration.
    pub fn register(&mut self, name: ModelName, model: Arc<dyn InsightModel>) -> u32 {
        let key = String::from(name);
        let revision = self.entries.get(&key).map_or(1, |e| e.revision + 1);

        self.entries.insert(
            key,
            ModelEntry {
                model,
                revision,
                registered_at: Utc::now(),
            },
        );

        revision
    }

    /// Get the entry for a name
    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.get(name)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered model names
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::insight::MockInsightModel;
    use crate::domain::insight::payload_from_json;

    fn mock(insights: serde_json::Value) -> Arc<dyn InsightModel> {
        Arc::new(MockInsightModel::new().with_insights(insights))
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ModelRegistry::new();
        let name = ModelName::new("trend").unwrap();

        let before = Utc::now();
        let revision = registry.register(name, mock(json!({"slope": 1.0})));

        assert_eq!(revision, 1);
        assert!(registry.contains("trend"));
        assert_eq!(registry.len(), 1);

        let entry = registry.get("trend").unwrap();
        assert_eq!(entry.revision(), 1);
        assert!(entry.registered_at() >= before);
        assert!(entry.registered_at() <= Utc::now());
    }

    #[test]
    fn test_get_missing_name() {
        let registry = ModelRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(!registry.contains("missing"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_overwrite_increments_revision_and_routes_to_newest() {
        let mut registry = ModelRegistry::new();
        let name = ModelName::new("trend").unwrap();

        registry.register(name.clone(), mock(json!("old")));
        let first_registered = registry.get("trend").unwrap().registered_at();

        let revision = registry.register(name, mock(json!("new")));

        assert_eq!(revision, 2);
        assert_eq!(registry.len(), 1);

        let entry = registry.get("trend").unwrap();
        assert_eq!(entry.revision(), 2);
        assert!(entry.registered_at() >= first_registered);

        let payload = payload_from_json(json!({})).unwrap();
        let insights = entry.model().predict(&payload).unwrap();
        assert_eq!(insights, json!("new"));
    }

    #[test]
    fn test_names_lists_all_entries() {
        let mut registry = ModelRegistry::new();
        registry.register(ModelName::new("trend").unwrap(), mock(json!(1)));
        registry.register(ModelName::new("churn").unwrap(), mock(json!(2)));

        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["churn".to_string(), "trend".to_string()]);
    }
}
