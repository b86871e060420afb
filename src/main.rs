//! Depot - Content-Addressable Dependency Installation Cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use depot::cli::{Cli, Commands};
use depot::config::ConfigManager;
use depot::error::DepotResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DepotResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("depot=warn"),
        1 => EnvFilter::new("depot=info"),
        _ => EnvFilter::new("depot=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let config = config_manager.load().await?;

    // Dispatch to command
    match cli.command {
        Commands::Install(args) => depot::cli::commands::install(args, &config).await,
        Commands::Path(args) => depot::cli::commands::path(args, &config).await,
        Commands::Hash(args) => depot::cli::commands::hash(args, &config).await,
        Commands::List(args) => depot::cli::commands::list(args, &config).await,
        Commands::Config(args) => depot::cli::commands::config(args, &config).await,
    }
}
