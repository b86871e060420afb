//! Path command - resolve a dependency set's cache path

use crate::cache::{install_path, CacheState};
use crate::cli::args::PathArgs;
use crate::cli::commands::{collect_specs, effective_base_dir};
use crate::config::Config;
use crate::error::DepotResult;
use console::style;

/// Execute the path command
pub async fn execute(args: PathArgs, config: &Config) -> DepotResult<()> {
    let specs = collect_specs(&args.spec).await?;
    let base_dir = effective_base_dir(args.base_dir.as_ref(), config)?;

    let path = install_path(&specs, &base_dir);
    let state = CacheState::probe(&path);

    let state_display = match state {
        CacheState::Populated => style("populated").green().to_string(),
        CacheState::Absent => style("absent").dim().to_string(),
    };

    println!("{} ({})", path.display(), state_display);
    Ok(())
}
