use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Model not found: {0}")]
    ModelNotFound(String),
    #[error("Failed to load model: {0}")]
    ModelLoadFailed(String),
    #[error("Download failed: {0}")]
    DownloadFailed(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Inference error: {0}")]
    InferenceError(String),
    #[error("Unknown trainer: {0}")]
    UnknownTrainer(String),
    #[error("Failed to load trainer group '{group}': {message}")]
    TrainerLoadFailed { group: String, message: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
