//! A lightweight model-loading facade: resolve pretrained model snapshots
//! from a local directory or a remote hub, dispatch construction through a
//! `(task, model type)` registry, and build trainers through a lazily-loaded
//! group table.

pub mod config;
pub mod error;
pub mod hub;
pub mod model;
pub mod trainers;

pub use error::{Error, Result};
pub use model::{Model, ModelConfig, ModelRegistry, PostprocessOptions, TensorMap};
pub use trainers::{build_trainer, Trainer, TrainerRegistry};
