use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid profile name: {0:?}")]
    InvalidProfileName(String),

    #[error("Profile unavailable: {0}")]
    ProfileUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration is read-only: {}", .0.display())]
    ReadOnly(PathBuf),
}

pub type CoreResult<T> = Result<T, CoreError>;
