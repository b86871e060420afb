//! Pip installer backend
//!
//! Implements the PackageInstaller trait by invoking pip through a Python
//! interpreter. Installs go into an exact target directory via
//! `pip install --target`.

use crate::error::{DepotError, DepotResult};
use crate::installer::backend::{InstallOutcome, PackageInstaller};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Package installer using pip (`<python> -m pip install`)
pub struct PipInstaller {
    program: String,
}

impl PipInstaller {
    /// Create a pip installer running under the given interpreter
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl PackageInstaller for PipInstaller {
    async fn install(&self, specs: &[String], target: &Path) -> DepotResult<InstallOutcome> {
        debug!(
            "Executing: {} -m pip install --target {} --quiet [{} specs]",
            self.program,
            target.display(),
            specs.len()
        );

        let output = Command::new(&self.program)
            .args(["-m", "pip", "install", "--target"])
            .arg(target)
            .arg("--quiet")
            .args(specs)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DepotError::command_failed(format!("{} -m pip install", self.program), e))?;

        Ok(InstallOutcome {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "pip"
    }
}
