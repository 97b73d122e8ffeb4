pub mod cache;

pub use cache::{SnapshotCache, SnapshotInfo};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::CONFIGURATION_FILE;
use hf_hub::api::sync::Api;
use std::path::PathBuf;

/// Resolves a remote model identifier to a local snapshot directory.
///
/// May block on network I/O; timeout and retry policy belong to the
/// implementation, not to callers.
pub trait SnapshotResolver {
    fn snapshot(&self, repo_id: &str) -> Result<PathBuf>;
}

/// Production resolver backed by the HuggingFace hub, with local TOML
/// bookkeeping so an already-resolved snapshot is reused without touching
/// the network.
#[derive(Debug, Default)]
pub struct HubResolver;

impl HubResolver {
    pub fn new() -> Self {
        Self
    }

    fn download(&self, repo_id: &str) -> Result<PathBuf> {
        tracing::info!("Resolving model from hub: {}", repo_id);

        let api = Api::new().map_err(|e| Error::DownloadFailed(e.to_string()))?;
        let repo = api.model(repo_id.to_string());

        let config_file = repo.get(CONFIGURATION_FILE).map_err(|e| {
            Error::DownloadFailed(format!("Could not find {}: {}", CONFIGURATION_FILE, e))
        })?;

        // Weights are optional at this layer; pull whichever format exists.
        if repo.get("model.safetensors").is_err() {
            let _ = repo.get("pytorch_model.bin");
        }

        let snapshot_dir = config_file
            .parent()
            .ok_or_else(|| Error::DownloadFailed("Invalid snapshot path".to_string()))?;

        Ok(snapshot_dir.to_path_buf())
    }
}

impl SnapshotResolver for HubResolver {
    fn snapshot(&self, repo_id: &str) -> Result<PathBuf> {
        let config = Config::from_env()?;
        let mut cache = SnapshotCache::load(&config)?;

        if let Ok(info) = cache.get(repo_id) {
            if info.snapshot_path.exists() {
                tracing::debug!("Reusing cached snapshot for {}", repo_id);
                return Ok(info.snapshot_path.clone());
            }
        }

        let snapshot_path = self.download(repo_id)?;

        cache.add(SnapshotInfo {
            repo_id: repo_id.to_string(),
            snapshot_path: snapshot_path.clone(),
            resolved_at: chrono::Utc::now().to_rfc3339(),
        });
        cache.save(&config)?;

        tracing::info!("Snapshot for '{}' resolved to {:?}", repo_id, snapshot_path);

        Ok(snapshot_path)
    }
}
