//! Command-line interface for name-resolver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Resolve a name fragment against a directory file
//! - **directory**: Summarize a directory file or show one canonical name
//! - **serve**: Serve the autocomplete API with periodic directory reloads
//!
//! ## Usage
//!
//! ```text
//! # Resolve a misspelled name
//! name-resolver search "jon smth" --corpus all_nodes.json
//!
//! # Show which tier matched each name
//! name-resolver search "smith john" --corpus all_nodes.json --explain
//!
//! # JSON output for scripting
//! name-resolver search john --corpus all_nodes.json --format json
//!
//! # Serve /api/autocomplete, reloading the directory every minute
//! name-resolver serve --corpus all_nodes.json --port 8080
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod directory;
pub mod search;

#[derive(Parser)]
#[command(name = "name-resolver")]
#[command(version)]
#[command(about = "Resolve partial or misspelled names into ranked display names")]
#[command(
    long_about = "name-resolver turns a typed name fragment into a ranked list of known display names.\n\nNames are matched through a cascade of exact, prefix, whole-word, substring, word-by-word and fuzzy comparisons, and each matched name expands into all of its display variants."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a name fragment into display names
    Search(search::SearchArgs),

    /// Inspect a directory file
    Directory(directory::DirectoryArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Directory file (JSON array of name records)
    #[arg(long, required = true)]
    pub corpus: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Seconds between directory reloads
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: u64,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
