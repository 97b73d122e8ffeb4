use crate::error::Result;
use crate::model::ModelConfig;
use crate::trainers::base::Trainer;
use crate::trainers::trainer::EpochBasedTrainer;
use crate::trainers::GroupExports;

/// Contrastive image-text trainer.
pub struct ClipTrainer {
    inner: EpochBasedTrainer,
    temperature: f64,
}

impl ClipTrainer {
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        let temperature = cfg
            .get("temperature")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.07);

        Ok(Self {
            inner: EpochBasedTrainer::from_config(cfg)?,
            temperature,
        })
    }
}

impl Trainer for ClipTrainer {
    fn name(&self) -> &str {
        "CLIPTrainer"
    }

    fn train(&mut self) -> Result<()> {
        tracing::info!(temperature = self.temperature, "Training contrastive image-text model");
        self.inner.train()
    }
}

pub(crate) fn exports() -> Result<GroupExports> {
    let mut exports = GroupExports::new();
    exports.insert("CLIPTrainer", |cfg| {
        Ok(Box::new(ClipTrainer::from_config(cfg)?))
    });
    Ok(exports)
}
