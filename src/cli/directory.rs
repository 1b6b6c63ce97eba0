use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::directory::snapshot::DirectorySnapshot;

#[derive(Args)]
pub struct DirectoryArgs {
    /// Directory file (JSON array of name records)
    #[arg(long, required = true)]
    pub corpus: PathBuf,

    /// Show the display variants of one canonical name
    #[arg(long)]
    pub show: Option<String>,
}

/// Execute directory subcommand
///
/// # Errors
///
/// Returns an error if the directory cannot be loaded or the requested
/// canonical name does not exist.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DirectoryArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let snapshot = DirectorySnapshot::load_from_file(&args.corpus)?;

    if let Some(canonical) = &args.show {
        let Some(displays) = snapshot.displays(canonical) else {
            anyhow::bail!("Canonical name not found: {canonical}");
        };
        let record_count = snapshot
            .records()
            .iter()
            .filter(|r| r.canonical == *canonical)
            .count();

        match format {
            OutputFormat::Text => {
                println!("{canonical}");
                println!("   Records: {record_count}");
                for display in displays {
                    println!("   {display}");
                }
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "canonical": canonical,
                    "record_count": record_count,
                    "displays": displays,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        return Ok(());
    }

    let most_variants = snapshot
        .entries()
        .iter()
        .max_by_key(|e| e.displays().len())
        .map(|e| (e.canonical(), e.displays().len()));

    match format {
        OutputFormat::Text => {
            println!("Directory: {}", args.corpus.display());
            println!("   Records: {}", snapshot.len());
            println!("   Canonical names: {}", snapshot.canonical_count());
            if let Some((canonical, count)) = most_variants {
                println!("   Most display variants: {canonical} ({count})");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": args.corpus.display().to_string(),
                "record_count": snapshot.len(),
                "canonical_count": snapshot.canonical_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
