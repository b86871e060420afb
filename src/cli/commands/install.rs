//! Install command - install or reuse a dependency set

use crate::cli::args::InstallArgs;
use crate::cli::commands::{collect_specs, effective_base_dir};
use crate::config::Config;
use crate::error::DepotResult;
use crate::installer::DepsInstaller;
use crate::search_path::SearchPath;
use console::style;
use std::ffi::OsString;

/// Execute the install command
pub async fn execute(args: InstallArgs, config: &Config) -> DepotResult<()> {
    let specs = collect_specs(&args.spec).await?;

    if specs.is_empty() {
        println!("No dependencies to install.");
        return Ok(());
    }

    let base_dir = effective_base_dir(args.base_dir.as_ref(), config)?;
    let installer = DepsInstaller::from_config(config)?;

    let Some(path) = installer.ensure_installed(&specs, Some(&base_dir)).await? else {
        println!("No dependencies to install.");
        return Ok(());
    };

    println!(
        "{} {} dependencies at {}",
        style("Installed").green().bold(),
        specs.len(),
        path.display()
    );

    if let Some(ref var) = args.print_search_path {
        let mut search_path =
            SearchPath::from_env(&std::env::var_os(var).unwrap_or_else(OsString::new));
        search_path.register(path);
        println!("{}={}", var, search_path.to_env_value()?.to_string_lossy());
    }

    Ok(())
}
