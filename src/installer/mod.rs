//! Idempotent dependency installation
//!
//! Orchestrates the install-or-reuse decision: resolve the
//! content-addressed target directory, reuse it when populated, otherwise
//! run the package installer exactly once against a staging directory and
//! publish it into the final path with an atomic rename.
//!
//! An entry moves `Absent -> Populated` on publish and stays terminal; a
//! failed install removes the staging directory, so the entry never
//! exists in a half-written state and a later call retries from
//! `Absent`. Two processes racing on the same fingerprint both build,
//! but only one rename wins; the loser discards its staging directory
//! and reuses the published entry.

mod backend;
mod factory;
mod pip;

pub use backend::{InstallOutcome, PackageInstaller};
pub use factory::create_installer;
pub use pip::PipInstaller;

use crate::cache::{resolve_install_path, CacheState};
use crate::config::Config;
use crate::error::{DepotError, DepotResult};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::{debug, info, warn};

/// Dependency installer driving a pluggable package-manager backend
pub struct DepsInstaller {
    backend: Box<dyn PackageInstaller>,
}

impl DepsInstaller {
    /// Create an installer with an explicit backend
    pub fn new(backend: Box<dyn PackageInstaller>) -> Self {
        Self { backend }
    }

    /// Create an installer with the backend selected by the configuration
    pub fn from_config(config: &Config) -> DepotResult<Self> {
        Ok(Self::new(create_installer(config)?))
    }

    /// Install dependencies to their content-addressed directory
    ///
    /// Returns `None` for an empty dependency list, without touching the
    /// filesystem. When the target directory is already populated the
    /// installer is not invoked and the path is returned as-is; different
    /// applications with the same dependency list share the same entry.
    ///
    /// The install runs against a staging sibling of the final path and
    /// is published with a rename, so the entry is either absent or
    /// complete, never partial. On installer failure the staging
    /// directory is removed (best effort) and the error carries the
    /// child's stderr. No retry is attempted.
    pub async fn ensure_installed(
        &self,
        deps: &[String],
        base_dir: Option<&Path>,
    ) -> DepotResult<Option<PathBuf>> {
        if deps.is_empty() {
            return Ok(None);
        }

        let target = resolve_install_path(deps, base_dir)?;

        if CacheState::probe(&target) == CacheState::Populated {
            debug!("Dependencies already installed at {}", target.display());
            return Ok(Some(target));
        }

        let staging = staging_path(&target);
        fs::create_dir_all(&staging)
            .await
            .map_err(|e| DepotError::io(format!("creating directory {}", staging.display()), e))?;

        info!(
            "Installing {} dependencies to {} via {}",
            deps.len(),
            target.display(),
            self.backend.backend_name()
        );

        match self.backend.install(deps, &staging).await {
            Ok(outcome) if outcome.success => Self::publish(staging, target).await.map(Some),
            Ok(outcome) => {
                warn!("Failed to install dependencies: {}", outcome.stderr);
                Self::discard(&staging).await;
                Err(DepotError::InstallFailed {
                    stderr: outcome.stderr,
                })
            }
            Err(e) => {
                warn!("Installer could not run: {}", e);
                Self::discard(&staging).await;
                Err(e)
            }
        }
    }

    /// Move a finished staging directory into the final entry path
    ///
    /// A concurrent process may have published the same fingerprint first;
    /// its entry is equivalent by construction, so the staging directory
    /// is discarded and the published entry returned.
    async fn publish(staging: PathBuf, target: PathBuf) -> DepotResult<PathBuf> {
        match fs::rename(&staging, &target).await {
            Ok(()) => {
                info!("Dependencies installed successfully at {}", target.display());
                Ok(target)
            }
            Err(e) => {
                if CacheState::probe(&target) == CacheState::Populated {
                    debug!(
                        "Entry {} was published concurrently, discarding staging",
                        target.display()
                    );
                    Self::discard(&staging).await;
                    return Ok(target);
                }
                Self::discard(&staging).await;
                Err(DepotError::io(format!("publishing {}", target.display()), e))
            }
        }
    }

    /// Remove a staging directory, ignoring deletion errors so they never
    /// mask the installation failure
    async fn discard(staging: &Path) {
        if let Err(e) = fs::remove_dir_all(staging).await {
            debug!("Cleanup of {} failed: {}", staging.display(), e);
        }
    }
}

/// Staging sibling of an entry path, unique per process and call
///
/// Kept next to the final path so the publishing rename stays on one
/// filesystem. The leading dot keeps it out of entry listings.
fn staging_path(target: &Path) -> PathBuf {
    static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

    let entry_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(
        ".staging-{}-{}-{}",
        entry_name,
        std::process::id(),
        STAGING_SEQ.fetch_add(1, Ordering::Relaxed)
    ))
}
