//! End-to-end flow over the public surface: write a model directory, register
//! a factory, load through `from_pretrained`, and run the loaded model.

use candle_core::{Device, Tensor};
use modelkit::model::{ModelConfig, CONFIGURATION_FILE};
use modelkit::{Model, ModelRegistry, Result, TensorMap};
use serde_json::json;
use std::path::Path;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

struct ScalingModel {
    factor: f64,
}

impl ScalingModel {
    fn from_config(cfg: ModelConfig) -> Result<Self> {
        let factor = cfg
            .get("factor")
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0);
        Ok(Self { factor })
    }
}

impl Model for ScalingModel {
    fn forward(&self, input: &TensorMap) -> Result<TensorMap> {
        let mut output = TensorMap::new();
        for (name, tensor) in input {
            let scaled = tensor
                .affine(self.factor, 0.0)
                .map_err(|e| modelkit::Error::InferenceError(e.to_string()))?;
            output.insert(name.clone(), scaled);
        }
        Ok(output)
    }
}

fn write_model_dir(dir: &Path) {
    std::fs::write(
        dir.join(CONFIGURATION_FILE),
        r#"{
            "task": "feature-extraction",
            "model": {
                "type": "scaler",
                "factor": 2.0
            }
        }"#,
    )
    .unwrap();
}

fn registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.register("feature-extraction", "scaler", |cfg| {
        Ok(Box::new(ScalingModel::from_config(cfg)?))
    });
    registry
}

#[test]
fn loads_and_runs_a_model_from_a_local_directory() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_model_dir(dir.path());

    let model = registry()
        .from_pretrained(dir.path().to_str().unwrap(), &[])
        .unwrap();

    let mut input = TensorMap::new();
    input.insert(
        "values".to_string(),
        Tensor::from_slice(&[1f32, 2.0], 2, &Device::Cpu).unwrap(),
    );

    let output = model.invoke(&input).unwrap();
    let values = output["values"].to_vec1::<f32>().unwrap();
    assert_eq!(values, vec![2.0, 4.0]);
}

#[test]
fn missing_configuration_file_fails() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let err = registry()
        .from_pretrained(dir.path().to_str().unwrap(), &[])
        .err()
        .unwrap();
    assert!(matches!(err, modelkit::Error::ConfigError(_)));
}

#[test]
fn overrides_reach_the_factory_under_the_literal_key_k() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_model_dir(dir.path());

    let mut registry = ModelRegistry::new();
    registry.register("feature-extraction", "scaler", |cfg| {
        assert_eq!(cfg.get_u64("k"), Some(9));
        assert!(!cfg.contains("batch_size"));
        Ok(Box::new(ScalingModel::from_config(cfg)?))
    });

    registry
        .from_pretrained(dir.path().to_str().unwrap(), &[("batch_size", json!(9))])
        .unwrap();
}

#[test]
fn builds_a_trainer_through_the_default_registry() {
    init_logging();
    let mut cfg = ModelConfig::new();
    cfg.set("max_epochs", json!(2));

    let mut trainer = modelkit::build_trainer("EpochBasedTrainer", &cfg).unwrap();
    assert_eq!(trainer.name(), "EpochBasedTrainer");
    trainer.train().unwrap();
}
