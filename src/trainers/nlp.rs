use crate::error::Result;
use crate::model::ModelConfig;
use crate::trainers::base::Trainer;
use crate::trainers::trainer::EpochBasedTrainer;
use crate::trainers::GroupExports;

pub struct SequenceClassificationTrainer {
    inner: EpochBasedTrainer,
    num_labels: u64,
}

impl SequenceClassificationTrainer {
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        Ok(Self {
            inner: EpochBasedTrainer::from_config(cfg)?,
            num_labels: cfg.get_u64("num_labels").unwrap_or(2),
        })
    }
}

impl Trainer for SequenceClassificationTrainer {
    fn name(&self) -> &str {
        "SequenceClassificationTrainer"
    }

    fn train(&mut self) -> Result<()> {
        tracing::info!(num_labels = self.num_labels, "Training sequence classifier");
        self.inner.train()
    }
}

pub(crate) fn exports() -> Result<GroupExports> {
    let mut exports = GroupExports::new();
    exports.insert("SequenceClassificationTrainer", |cfg| {
        Ok(Box::new(SequenceClassificationTrainer::from_config(cfg)?))
    });
    Ok(exports)
}
