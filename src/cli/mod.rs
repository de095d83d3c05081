//! Command-line interface for ore-guide.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **lookup**: Answer a single resource query and exit
//! - **list**: Print every resource in the loaded dataset
//! - **check**: Validate a dataset file without querying it
//! - **guide**: Start the interactive guide session
//!
//! ## Usage
//!
//! ```text
//! # One-shot query against the embedded dataset
//! ore-guide lookup diamond
//!
//! # Query a custom dataset
//! ore-guide lookup "ancient debris" --data my_ores.csv
//!
//! # JSON output for scripting
//! ore-guide lookup diamond --format json
//!
//! # Validate a dataset file
//! ore-guide check my_ores.csv
//!
//! # Interactive session
//! ore-guide guide
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::store::ResourceCatalog;

pub mod check;
pub mod guide;
pub mod list;
pub mod lookup;

#[derive(Parser)]
#[command(name = "ore-guide")]
#[command(version)]
#[command(about = "Find out where game ores spawn and what tools you need to mine them")]
#[command(
    long_about = "ore-guide answers questions about game resources: where an ore spawns, at which depth, and what tool tier it takes to mine it.\n\nQueries match loosely: 'diamond' finds 'Diamond Ore'. When several resources match, the guide asks you to be more specific rather than guessing."
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
    /// Look up a single resource by name
    Lookup(lookup::LookupArgs),

    /// List every resource in the dataset
    List(list::ListArgs),

    /// Validate a dataset file
    Check(check::CheckArgs),

    /// Start the interactive guide
    Guide(guide::GuideArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the dataset named by `--data`, or the embedded default
pub(crate) fn load_catalog(data: Option<&Path>, verbose: bool) -> anyhow::Result<ResourceCatalog> {
    let catalog = match data {
        Some(path) => ResourceCatalog::load_from_file(path)?,
        None => ResourceCatalog::load_embedded()?,
    };

    if verbose {
        eprintln!("Loaded {} resources", catalog.len());
    }

    Ok(catalog)
}
