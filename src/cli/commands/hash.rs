//! Hash command - print a dependency set's fingerprint

use crate::cache::deps_fingerprint;
use crate::cli::args::HashArgs;
use crate::cli::commands::collect_specs;
use crate::config::Config;
use crate::error::DepotResult;

/// Execute the hash command
pub async fn execute(args: HashArgs, _config: &Config) -> DepotResult<()> {
    let specs = collect_specs(&args.spec).await?;
    println!("{}", deps_fingerprint(&specs));
    Ok(())
}
