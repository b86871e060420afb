//! Configuration schema for Depot
//!
//! Configuration is stored at `~/.config/depot/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache storage settings
    pub cache: CacheConfig,

    /// Package installer settings
    pub installer: InstallerConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Cache storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Base directory for cache entries; overrides the platform default
    pub base_dir: Option<PathBuf>,
}

/// Package installer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Installer backend to use
    pub backend: String,

    /// Interpreter the backend runs under
    pub program: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            backend: "pip".to_string(),
            program: "python3".to_string(),
        }
    }
}
