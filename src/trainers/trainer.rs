use crate::error::Result;
use crate::model::ModelConfig;
use crate::trainers::base::Trainer;
use crate::trainers::GroupExports;
use std::path::PathBuf;

/// General-purpose trainer that runs a fixed number of epochs read from the
/// model configuration (`max_epochs`, default 1).
pub struct EpochBasedTrainer {
    work_dir: Option<PathBuf>,
    max_epochs: u64,
    epoch: u64,
}

impl EpochBasedTrainer {
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        Ok(Self {
            work_dir: cfg.get_str("work_dir").map(PathBuf::from),
            max_epochs: cfg.get_u64("max_epochs").unwrap_or(1),
            epoch: 0,
        })
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn max_epochs(&self) -> u64 {
        self.max_epochs
    }

    fn run_epoch(&mut self) -> Result<()> {
        tracing::info!(epoch = self.epoch, max_epochs = self.max_epochs, "Running epoch");
        self.epoch += 1;
        Ok(())
    }
}

impl Trainer for EpochBasedTrainer {
    fn name(&self) -> &str {
        "EpochBasedTrainer"
    }

    fn train(&mut self) -> Result<()> {
        if let Some(work_dir) = &self.work_dir {
            std::fs::create_dir_all(work_dir)?;
        }

        while self.epoch < self.max_epochs {
            self.run_epoch()?;
        }

        tracing::info!("Training finished after {} epochs", self.epoch);
        Ok(())
    }
}

pub(crate) fn exports() -> Result<GroupExports> {
    let mut exports = GroupExports::new();
    exports.insert("EpochBasedTrainer", |cfg| {
        Ok(Box::new(EpochBasedTrainer::from_config(cfg)?))
    });
    Ok(exports)
}
