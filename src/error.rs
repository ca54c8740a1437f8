use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to write tour output: {0}")]
    Output(#[from] io::Error),
}

impl TourError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = TourError> = std::result::Result<T, E>;
