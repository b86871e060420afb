//! Installer factory for creating configured backends
//!
//! Selects a PackageInstaller implementation from the `[installer]`
//! section of the configuration.

use crate::config::Config;
use crate::error::{DepotError, DepotResult};
use crate::installer::backend::PackageInstaller;
use crate::installer::pip::PipInstaller;

/// Create a package installer from the configuration
///
/// # Arguments
/// * `config` - The application configuration
///
/// # Returns
/// * `Ok(Box<dyn PackageInstaller>)` - A boxed installer implementation
/// * `Err` - If the configured backend is unknown
pub fn create_installer(config: &Config) -> DepotResult<Box<dyn PackageInstaller>> {
    match config.installer.backend.as_str() {
        "pip" => Ok(Box::new(PipInstaller::new(&config.installer.program))),
        other => Err(DepotError::InstallerUnsupported(other.to_string())),
    }
}
