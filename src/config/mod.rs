//! Configuration management for Depot

pub mod schema;

pub use schema::Config;

use crate::error::{DepotError, DepotResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Environment variable overriding the base storage directory
pub const DEPOT_HOME_ENV: &str = "DEPOT_HOME";

/// Resolve the default base directory for cache storage
///
/// Resolution order: `DEPOT_HOME`, then the platform data directory.
/// Fails with [`DepotError::BaseDirUnresolved`] when neither is available.
pub fn default_base_dir() -> DepotResult<PathBuf> {
    if let Some(home) = std::env::var_os(DEPOT_HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::data_dir()
        .map(|dir| dir.join("depot"))
        .ok_or(DepotError::BaseDirUnresolved)
}

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("depot")
            .join("config.toml")
    }

    /// Load configuration, using defaults if not exists
    pub async fn load(&self) -> DepotResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> DepotResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DepotError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| DepotError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> DepotResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            DepotError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> DepotResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DepotError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");
        let manager = ConfigManager::with_path(path);

        let config = manager.load().await.unwrap();
        assert_eq!(config.installer.backend, "pip");
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let manager = ConfigManager::with_path(path);

        let mut config = Config::default();
        config.installer.program = "python3.11".to_string();

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.installer.program, "python3.11");
    }

    #[tokio::test]
    async fn load_invalid_toml_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let manager = ConfigManager::with_path(path);
        let err = manager.load().await.unwrap_err();

        assert!(matches!(err, DepotError::ConfigInvalid { .. }));
    }

    #[test]
    #[serial]
    fn base_dir_from_env() {
        std::env::set_var(DEPOT_HOME_ENV, "/srv/depot-home");
        let dir = default_base_dir().unwrap();
        std::env::remove_var(DEPOT_HOME_ENV);

        assert_eq!(dir, PathBuf::from("/srv/depot-home"));
    }

    #[test]
    #[serial]
    fn base_dir_falls_back_to_data_dir() {
        std::env::remove_var(DEPOT_HOME_ENV);
        let result = default_base_dir();

        // On platforms with a data dir this resolves; either way an empty
        // DEPOT_HOME must not be returned as the base
        if let Ok(dir) = result {
            assert!(dir.ends_with("depot"));
        }
    }
}
