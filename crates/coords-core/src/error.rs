//! Error types raised by the overlay.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigOption;

/// Failure to append a line to the coordinate output file.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced while loading, saving or editing the overlay config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("option {option} does not accept a {found} value")]
    OptionType {
        option: ConfigOption,
        found: &'static str,
    },

    #[error("unknown key name: {0}")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
