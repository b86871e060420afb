//! Error types for Depot
//!
//! All modules use `DepotResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Depot operations
pub type DepotResult<T> = Result<T, DepotError>;

/// All errors that can occur in Depot
#[derive(Error, Debug)]
pub enum DepotError {
    // Configuration errors
    #[error("No usable base directory. Set DEPOT_HOME or [cache].base_dir in the config.")]
    BaseDirUnresolved,

    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Installer errors
    #[error("Failed to install dependencies: {stderr}")]
    InstallFailed { stderr: String },

    #[error("Unsupported installer backend: {0}")]
    InstallerUnsupported(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DepotError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::BaseDirUnresolved => Some("Run: export DEPOT_HOME=~/.depot"),
            Self::InstallerUnsupported(_) => Some("Supported backends: pip"),
            Self::CommandFailed { .. } => {
                Some("Check that the configured interpreter is on PATH")
            }
            _ => None,
        }
    }
}
