use crate::error::Result;
use crate::trainers::GroupExports;

/// Contract every trainer implementation satisfies. Training algorithms live
/// in the group modules; this layer only standardizes invocation.
pub trait Trainer {
    fn name(&self) -> &str;

    fn train(&mut self) -> Result<()>;
}

/// Trainer that performs no work. Useful as a placeholder in pipelines that
/// expect a trainer but have nothing to fit.
#[derive(Debug, Default)]
pub struct DummyTrainer;

impl Trainer for DummyTrainer {
    fn name(&self) -> &str {
        "DummyTrainer"
    }

    fn train(&mut self) -> Result<()> {
        tracing::info!("Dummy trainer invoked, nothing to do");
        Ok(())
    }
}

pub(crate) fn exports() -> Result<GroupExports> {
    let mut exports = GroupExports::new();
    exports.insert("DummyTrainer", |_cfg| Ok(Box::new(DummyTrainer)));
    Ok(exports)
}
