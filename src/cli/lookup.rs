use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::resource::Resource;
use crate::matching::engine::{LookupEngine, LookupOutcome};

#[derive(Args)]
pub struct LookupArgs {
    /// Resource name to look up (e.g. "Diamond Ore" or just "diamond")
    #[arg(required = true)]
    pub query: String,

    /// Path to a custom dataset file (CSV, TSV, or JSON)
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Serializable lookup result for `--format json`
#[derive(Serialize)]
struct LookupReport<'a> {
    query: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<&'a Resource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    candidates: Vec<&'a str>,
}

/// Execute lookup subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(args.data.as_deref(), verbose)?;
    let engine = LookupEngine::new(&catalog);
    let outcome = engine.lookup(&args.query);

    match format {
        OutputFormat::Text => println!("{}", LookupEngine::render(&outcome)),
        OutputFormat::Json => print_json(&args.query, &outcome)?,
        OutputFormat::Tsv => print_tsv(&outcome),
    }

    // A miss is a nonzero exit so scripts can branch on it
    if matches!(outcome, LookupOutcome::NotFound) {
        std::process::exit(1);
    }

    Ok(())
}

fn print_json(query: &str, outcome: &LookupOutcome<'_>) -> anyhow::Result<()> {
    let report = match outcome {
        LookupOutcome::Found(resource) => LookupReport {
            query,
            status: "found",
            resource: Some(resource),
            candidates: Vec::new(),
        },
        LookupOutcome::Ambiguous(candidates) => LookupReport {
            query,
            status: "ambiguous",
            resource: None,
            candidates: candidates.iter().map(|r| r.name.as_str()).collect(),
        },
        LookupOutcome::NotFound => LookupReport {
            query,
            status: "not_found",
            resource: None,
            candidates: Vec::new(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_tsv(outcome: &LookupOutcome<'_>) {
    match outcome {
        LookupOutcome::Found(r) => {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.name, r.location, r.depth_range.min, r.depth_range.max, r.required_tool, r.method
            );
        }
        LookupOutcome::Ambiguous(candidates) => {
            for r in candidates {
                println!("{}", r.name);
            }
        }
        LookupOutcome::NotFound => {}
    }
}
