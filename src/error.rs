//! Error types and Result alias.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors surfaced while assembling configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A non-optional settings file was not found.
    #[error("required settings file not found: {}", .path.display())]
    MissingSettingsFile { path: PathBuf },

    /// A settings file exists but could not be read.
    #[error("failed to read settings file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file contained malformed JSON.
    #[error("invalid JSON in settings file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A settings file did not contain a JSON object at the top level.
    #[error("settings file {} must contain a JSON object, found {found}", .path.display())]
    InvalidFormat { path: PathBuf, found: &'static str },

    /// `--environment` appeared as the final argument with no value.
    #[error("--environment was given without a value")]
    MissingEnvironmentValue,

    /// Configuration values could not be deserialized into the requested type.
    #[error("failed to bind configuration to {target}")]
    Bind {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
