use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the configuration file inside a model directory.
pub const CONFIGURATION_FILE: &str = "configuration.json";

/// Top-level configuration read from `<model_dir>/configuration.json`.
///
/// Carries the task identifier and the nested model configuration; everything
/// else in the file is opaque to this crate and left untouched.
#[derive(Debug, Clone)]
pub struct Configuration {
    values: Map<String, Value>,
}

impl Configuration {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let values: Map<String, Value> = serde_json::from_str(&content)?;
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn task(&self) -> Result<String> {
        self.values
            .get("task")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| Error::ConfigError("Missing 'task' field".to_string()))
    }

    pub fn model(&self) -> Result<ModelConfig> {
        let section = self
            .values
            .get("model")
            .and_then(|v| v.as_object())
            .ok_or_else(|| Error::ConfigError("Missing 'model' section".to_string()))?;

        Ok(ModelConfig {
            values: section.clone(),
        })
    }
}

/// The nested `model` section of a configuration, with free-form
/// string-keyed fields.
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    values: Map<String, Value>,
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.values.get(key).and_then(|v| v.as_u64())
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The model type discriminator used for factory dispatch.
    pub fn type_name(&self) -> Result<&str> {
        self.get_str("type")
            .ok_or_else(|| Error::ConfigError("Model config has no 'type' field".to_string()))
    }

    pub fn model_dir(&self) -> Option<PathBuf> {
        self.get_str("model_dir").map(PathBuf::from)
    }

    /// Copies the legacy `model_type` field into `type` when the latter is
    /// absent. One-way and idempotent: once `type` is set, this is a no-op.
    pub fn normalize_type(&mut self) {
        if self.contains("type") {
            return;
        }
        if let Some(legacy) = self.values.get("model_type").cloned() {
            self.values.insert("type".to_string(), legacy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_copies_legacy_model_type() {
        let mut cfg = ModelConfig::new();
        cfg.set("model_type", json!("foo"));

        cfg.normalize_type();
        assert_eq!(cfg.get_str("type"), Some("foo"));

        // Idempotent once type is set.
        cfg.set("model_type", json!("bar"));
        cfg.normalize_type();
        assert_eq!(cfg.get_str("type"), Some("foo"));
    }

    #[test]
    fn normalize_keeps_existing_type() {
        let mut cfg = ModelConfig::new();
        cfg.set("type", json!("canonical"));
        cfg.set("model_type", json!("legacy"));

        cfg.normalize_type();
        assert_eq!(cfg.get_str("type"), Some("canonical"));
    }

    #[test]
    fn normalize_without_legacy_field_is_a_noop() {
        let mut cfg = ModelConfig::new();
        cfg.normalize_type();
        assert!(!cfg.contains("type"));
    }

    #[test]
    fn configuration_exposes_task_and_model_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIGURATION_FILE);
        std::fs::write(
            &path,
            r#"{"task": "text-classification", "model": {"type": "bert", "hidden_size": 768}}"#,
        )
        .unwrap();

        let configuration = Configuration::from_file(&path).unwrap();
        assert_eq!(configuration.task().unwrap(), "text-classification");

        let model_cfg = configuration.model().unwrap();
        assert_eq!(model_cfg.type_name().unwrap(), "bert");
        assert_eq!(model_cfg.get_u64("hidden_size"), Some(768));
    }

    #[test]
    fn missing_configuration_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Configuration::from_file(&dir.path().join(CONFIGURATION_FILE)).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
