//! CLI command implementations

pub mod config;
pub mod hash;
pub mod install;
pub mod list;
pub mod path;

pub use config::execute as config;
pub use hash::execute as hash;
pub use install::execute as install;
pub use list::execute as list;
pub use path::execute as path;

use crate::cli::args::SpecArgs;
use crate::config::{default_base_dir, Config};
use crate::error::{DepotError, DepotResult};
use std::path::PathBuf;
use tokio::fs;

/// Collect dependency specifiers from positionals and the requirements file
///
/// Requirements files hold one specifier per line; blank lines and `#`
/// comments are skipped.
pub(crate) async fn collect_specs(args: &SpecArgs) -> DepotResult<Vec<String>> {
    let mut specs = args.specs.clone();

    if let Some(ref file) = args.requirements {
        let content = fs::read_to_string(file)
            .await
            .map_err(|e| DepotError::io(format!("reading requirements {}", file.display()), e))?;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            specs.push(line.to_string());
        }
    }

    Ok(specs)
}

/// Resolve the effective base directory: CLI flag, then config, then default
pub(crate) fn effective_base_dir(
    flag: Option<&PathBuf>,
    config: &Config,
) -> DepotResult<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.clone());
    }
    if let Some(ref dir) = config.cache.base_dir {
        return Ok(dir.clone());
    }
    default_base_dir()
}
