use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::Candidate;
use crate::directory::snapshot::DirectorySnapshot;
use crate::matching::engine::{MatchingEngine, DEFAULT_CUTOFF, DEFAULT_LIMIT};
use crate::utils::validation::{validate_cutoff, validate_query};

#[derive(Args)]
pub struct SearchArgs {
    /// Name fragment to resolve
    #[arg(required = true)]
    pub query: String,

    /// Directory file (JSON array of name records)
    #[arg(long, required = true)]
    pub corpus: PathBuf,

    /// Maximum number of display names to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Minimum similarity (0-100) for fuzzy matches
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,

    /// Also show the matched canonical names with their tier and score
    #[arg(long)]
    pub explain: bool,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the query is invalid, the directory cannot be loaded,
/// or the search fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    validate_query(&args.query)?;
    let cutoff = validate_cutoff(args.cutoff)?;

    let snapshot = DirectorySnapshot::load_from_file(&args.corpus)?;
    if verbose {
        eprintln!(
            "Loaded {} records ({} canonical names) from {}",
            snapshot.len(),
            snapshot.canonical_count(),
            args.corpus.display()
        );
    }

    let engine = MatchingEngine::new(&snapshot);
    let names = engine.search(&args.query, args.limit, cutoff)?;
    let candidates = if args.explain {
        engine.find_candidates(&args.query, args.limit, cutoff)?
    } else {
        Vec::new()
    };

    match format {
        OutputFormat::Text => print_text_results(&names, &candidates),
        OutputFormat::Json => print_json_results(&args.query, &names, &candidates)?,
    }

    Ok(())
}

fn print_text_results(names: &[String], candidates: &[Candidate<'_>]) {
    if names.is_empty() {
        println!("No matches.");
    }
    for (i, name) in names.iter().enumerate() {
        println!("{:>3}. {name}", i + 1);
    }

    if !candidates.is_empty() {
        println!("\nMatched names:");
        for candidate in candidates {
            println!(
                "   {:<10} {:>6.2}  {}",
                candidate.tier.to_string(),
                candidate.score,
                candidate.canonical
            );
        }
    }
}

fn print_json_results(
    query: &str,
    names: &[String],
    candidates: &[Candidate<'_>],
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "query": query,
        "results": names,
    });

    if !candidates.is_empty() {
        output["candidates"] = candidates
            .iter()
            .map(|c| {
                serde_json::json!({
                    "canonical": c.canonical,
                    "tier": c.tier,
                    "score": c.score,
                })
            })
            .collect();
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
