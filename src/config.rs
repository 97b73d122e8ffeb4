use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: PathBuf,
    pub cache_path: PathBuf,
}

impl Config {
    pub fn new() -> crate::error::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "modelkit").ok_or_else(|| {
            crate::error::Error::ConfigError("Could not determine config directory".to_string())
        })?;

        let data_dir = project_dirs.data_dir().to_path_buf();
        let cache_path = data_dir.join("snapshots.toml");

        std::fs::create_dir_all(&data_dir)?;

        Ok(Self {
            data_dir,
            cache_path,
        })
    }

    pub fn from_env() -> crate::error::Result<Self> {
        if let Ok(data_dir) = std::env::var("MODELKIT_DATA_DIR") {
            let data_dir = PathBuf::from(data_dir);
            let cache_path = data_dir.join("snapshots.toml");

            std::fs::create_dir_all(&data_dir)?;

            Ok(Self {
                data_dir,
                cache_path,
            })
        } else {
            Self::new()
        }
    }
}
