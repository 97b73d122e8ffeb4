use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub repo_id: String,
    pub snapshot_path: PathBuf,
    pub resolved_at: String,
}

/// Local bookkeeping of hub snapshots already resolved on this machine,
/// persisted as TOML under the data directory.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SnapshotCache {
    snapshots: HashMap<String, SnapshotInfo>,
}

impl SnapshotCache {
    pub fn load(config: &Config) -> Result<Self> {
        if !config.cache_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config.cache_path)?;
        let cache: SnapshotCache = toml::from_str(&content)?;
        Ok(cache)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&config.cache_path, content)?;
        Ok(())
    }

    pub fn add(&mut self, info: SnapshotInfo) {
        self.snapshots.insert(info.repo_id.clone(), info);
    }

    pub fn get(&self, repo_id: &str) -> Result<&SnapshotInfo> {
        self.snapshots
            .get(repo_id)
            .ok_or_else(|| Error::ModelNotFound(repo_id.to_string()))
    }

    pub fn list(&self) -> Vec<&SnapshotInfo> {
        self.snapshots.values().collect()
    }
}
