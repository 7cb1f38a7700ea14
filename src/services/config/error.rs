use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or saving a timeline config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
