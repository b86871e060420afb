//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Depot - Content-addressable dependency installation cache
///
/// Installs dependency sets into directories keyed by a fingerprint of
/// the dependency list, so identical sets are installed exactly once and
/// shared between applications.
#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DEPOT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a dependency set into its cache entry (or reuse it)
    Install(InstallArgs),

    /// Print the cache path for a dependency set without installing
    Path(PathArgs),

    /// Print the fingerprint for a dependency set
    Hash(HashArgs),

    /// List cache entries
    List(ListArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Dependency specifier inputs shared by install/path/hash
#[derive(Parser, Debug)]
pub struct SpecArgs {
    /// Dependency specifiers (e.g. "requests" or "numpy==1.26.0")
    pub specs: Vec<String>,

    /// Read specifiers from a requirements-style file
    #[arg(short = 'r', long = "requirements", value_name = "FILE")]
    pub requirements: Option<PathBuf>,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
pub struct InstallArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Base directory for cache storage (overrides config and DEPOT_HOME)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Print the named env var's path list with the entry registered
    #[arg(long, value_name = "VAR")]
    pub print_search_path: Option<String>,
}

/// Arguments for the path command
#[derive(Parser, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Base directory for cache storage (overrides config and DEPOT_HOME)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
}

/// Arguments for the hash command
#[derive(Parser, Debug)]
pub struct HashArgs {
    #[command(flatten)]
    pub spec: SpecArgs,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Base directory for cache storage (overrides config and DEPOT_HOME)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action (defaults to show)
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

/// Output format for list commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array
    Json,
    /// One name per line
    Plain,
}
