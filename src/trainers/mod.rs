pub mod base;
pub mod cv;
pub mod multi_modal;
pub mod nlp;
pub mod nlp_trainer;
pub mod trainer;

pub use base::{DummyTrainer, Trainer};
pub use cv::{ImageInstanceSegmentationTrainer, ImagePortraitEnhancementTrainer};
pub use multi_modal::ClipTrainer;
pub use nlp::SequenceClassificationTrainer;
pub use nlp_trainer::{NlpEpochBasedTrainer, VecoTrainer};
pub use trainer::EpochBasedTrainer;

use crate::error::{Error, Result};
use crate::model::ModelConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Builds a trainer from a model configuration.
pub type TrainerBuilder = Arc<dyn Fn(&ModelConfig) -> Result<Box<dyn Trainer>> + Send + Sync>;

/// Builders a trainer group makes available once loaded.
#[derive(Default)]
pub struct GroupExports {
    builders: HashMap<&'static str, TrainerBuilder>,
}

impl GroupExports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<F>(&mut self, symbol: &'static str, builder: F)
    where
        F: Fn(&ModelConfig) -> Result<Box<dyn Trainer>> + Send + Sync + 'static,
    {
        self.builders.insert(symbol, Arc::new(builder));
    }

    fn get(&self, symbol: &str) -> Option<TrainerBuilder> {
        self.builders.get(symbol).cloned()
    }
}

type GroupLoader = Box<dyn Fn() -> Result<GroupExports> + Send + Sync>;

/// Declarative registry entry: a named group, the symbols it exports, and the
/// loader that produces its export table on first use.
pub struct TrainerGroup {
    name: &'static str,
    symbols: &'static [&'static str],
    loader: GroupLoader,
}

impl TrainerGroup {
    pub fn new<F>(name: &'static str, symbols: &'static [&'static str], loader: F) -> Self
    where
        F: Fn() -> Result<GroupExports> + Send + Sync + 'static,
    {
        Self {
            name,
            symbols,
            loader: Box::new(loader),
        }
    }
}

/// Symbol-to-group indirection that loads each trainer group at most once,
/// and only when one of its symbols is first requested.
pub struct TrainerRegistry {
    groups: Vec<TrainerGroup>,
    loaded: Mutex<HashMap<&'static str, Arc<GroupExports>>>,
}

impl TrainerRegistry {
    pub fn new(groups: Vec<TrainerGroup>) -> Self {
        Self {
            groups,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_groups() -> Self {
        Self::new(vec![
            TrainerGroup::new("base", &["DummyTrainer"], base::exports),
            TrainerGroup::new(
                "cv",
                &[
                    "ImageInstanceSegmentationTrainer",
                    "ImagePortraitEnhancementTrainer",
                ],
                cv::exports,
            ),
            TrainerGroup::new("multi_modal", &["CLIPTrainer"], multi_modal::exports),
            TrainerGroup::new("nlp", &["SequenceClassificationTrainer"], nlp::exports),
            TrainerGroup::new(
                "nlp_trainer",
                &["NlpEpochBasedTrainer", "VecoTrainer"],
                nlp_trainer::exports,
            ),
            TrainerGroup::new("trainer", &["EpochBasedTrainer"], trainer::exports),
        ])
    }

    /// Resolves a trainer symbol to its builder, loading the declaring group
    /// on first use. Loader failures propagate and are not cached, so a later
    /// request retries the load.
    ///
    /// The registry lock is held while a loader runs, so loaders must not
    /// call back into the registry.
    pub fn get(&self, symbol: &str) -> Result<TrainerBuilder> {
        let group = self
            .groups
            .iter()
            .find(|g| g.symbols.iter().any(|s| *s == symbol))
            .ok_or_else(|| Error::UnknownTrainer(symbol.to_string()))?;

        let mut loaded = self
            .loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(exports) = loaded.get(group.name) {
            return exports
                .get(symbol)
                .ok_or_else(|| missing_symbol(group.name, symbol));
        }

        tracing::debug!("Loading trainer group '{}'", group.name);
        let exports = Arc::new((group.loader)()?);
        loaded.insert(group.name, exports.clone());

        exports
            .get(symbol)
            .ok_or_else(|| missing_symbol(group.name, symbol))
    }

    /// Convenience over [`get`](Self::get): resolve and build in one step.
    pub fn build(&self, symbol: &str, cfg: &ModelConfig) -> Result<Box<dyn Trainer>> {
        let builder = self.get(symbol)?;
        builder(cfg)
    }
}

// A declared symbol missing from its loaded export table is an authoring
// error in the group module, not a user mistake.
fn missing_symbol(group: &str, symbol: &str) -> Error {
    Error::TrainerLoadFailed {
        group: group.to_string(),
        message: format!("symbol '{symbol}' missing from group exports"),
    }
}

static DEFAULT_REGISTRY: OnceLock<TrainerRegistry> = OnceLock::new();

/// Builds a trainer by symbol name from the process-wide default registry.
pub fn build_trainer(symbol: &str, cfg: &ModelConfig) -> Result<Box<dyn Trainer>> {
    DEFAULT_REGISTRY
        .get_or_init(TrainerRegistry::with_default_groups)
        .build(symbol, cfg)
}
