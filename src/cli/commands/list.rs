//! List command - enumerate cache entries

use crate::cache::{list_entries, CacheEntry, CacheState};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::effective_base_dir;
use crate::config::Config;
use crate::error::DepotResult;
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> DepotResult<()> {
    let base_dir = effective_base_dir(args.base_dir.as_ref(), config)?;
    let entries = list_entries(&base_dir)?;

    if entries.is_empty() {
        println!("No cache entries found.");
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

fn print_table(entries: &[CacheEntry]) {
    println!("{:<16} {:<10} {:<20}", "FINGERPRINT", "STATE", "MODIFIED");
    println!("{}", "-".repeat(48));

    for entry in entries {
        let state_display = match entry.state {
            CacheState::Populated => style("populated").green().to_string(),
            CacheState::Absent => style("absent").dim().to_string(),
        };

        let modified = entry
            .modified_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<16} {:<10} {:<20}",
            &entry.fingerprint[..12],
            state_display,
            modified
        );
    }

    println!();
    println!("Total: {} entry(ies)", entries.len());
}

fn print_json(entries: &[CacheEntry]) -> DepotResult<()> {
    #[derive(serde::Serialize)]
    struct EntryJson {
        fingerprint: String,
        path: String,
        state: CacheState,
        modified_at: Option<String>,
    }

    let json_entries: Vec<EntryJson> = entries
        .iter()
        .map(|e| EntryJson {
            fingerprint: e.fingerprint.clone(),
            path: e.path.display().to_string(),
            state: e.state,
            modified_at: e.modified_at.map(|t| t.to_rfc3339()),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json_entries)?);
    Ok(())
}

fn print_plain(entries: &[CacheEntry]) {
    for entry in entries {
        println!("{}", entry.fingerprint);
    }
}
