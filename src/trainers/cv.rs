use crate::error::Result;
use crate::model::ModelConfig;
use crate::trainers::base::Trainer;
use crate::trainers::trainer::EpochBasedTrainer;
use crate::trainers::GroupExports;

pub struct ImageInstanceSegmentationTrainer {
    inner: EpochBasedTrainer,
}

impl ImageInstanceSegmentationTrainer {
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        Ok(Self {
            inner: EpochBasedTrainer::from_config(cfg)?,
        })
    }
}

impl Trainer for ImageInstanceSegmentationTrainer {
    fn name(&self) -> &str {
        "ImageInstanceSegmentationTrainer"
    }

    fn train(&mut self) -> Result<()> {
        tracing::info!("Training instance segmentation model");
        self.inner.train()
    }
}

pub struct ImagePortraitEnhancementTrainer {
    inner: EpochBasedTrainer,
}

impl ImagePortraitEnhancementTrainer {
    pub fn from_config(cfg: &ModelConfig) -> Result<Self> {
        Ok(Self {
            inner: EpochBasedTrainer::from_config(cfg)?,
        })
    }
}

impl Trainer for ImagePortraitEnhancementTrainer {
    fn name(&self) -> &str {
        "ImagePortraitEnhancementTrainer"
    }

    fn train(&mut self) -> Result<()> {
        tracing::info!("Training portrait enhancement model");
        self.inner.train()
    }
}

pub(crate) fn exports() -> Result<GroupExports> {
    let mut exports = GroupExports::new();
    exports.insert("ImageInstanceSegmentationTrainer", |cfg| {
        Ok(Box::new(ImageInstanceSegmentationTrainer::from_config(cfg)?))
    });
    exports.insert("ImagePortraitEnhancementTrainer", |cfg| {
        Ok(Box::new(ImagePortraitEnhancementTrainer::from_config(cfg)?))
    });
    Ok(exports)
}
