//! Package installer abstraction
//!
//! Provides a trait for external package-manager invocation so the
//! install-or-reuse decision logic can be tested without spawning real
//! processes.

use crate::error::DepotResult;
use async_trait::async_trait;
use std::path::Path;

/// Result of one installer invocation
///
/// The backend reports the child's outcome; interpreting it (rollback,
/// error signaling) is the engine's job.
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    /// Whether the child process exited with status zero
    pub success: bool,
    /// Captured standard-error text
    pub stderr: String,
}

/// Abstract package installer interface
///
/// Implementations invoke an external package manager to install the given
/// specifiers into an exact target directory, quietly and
/// non-interactively, blocking until the child exits.
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    /// Install the specifiers into the target directory
    ///
    /// Errors only when the child process could not be run at all; a child
    /// that ran and failed is reported through [`InstallOutcome`].
    async fn install(&self, specs: &[String], target: &Path) -> DepotResult<InstallOutcome>;

    /// Get the human-readable backend name for display
    fn backend_name(&self) -> &'static str;
}
