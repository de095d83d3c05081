use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::catalog::store::ResourceCatalog;

#[derive(Args)]
pub struct CheckArgs {
    /// Dataset file to validate (CSV, TSV, or JSON)
    #[arg(required = true)]
    pub path: PathBuf,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error describing the first problem in the file, which `main`
/// reports and turns into a nonzero exit.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, verbose: bool) -> anyhow::Result<()> {
    let catalog = ResourceCatalog::load_from_file(&args.path)
        .with_context(|| format!("{} failed validation", args.path.display()))?;

    if verbose {
        for name in catalog.names() {
            eprintln!("- {name}");
        }
    }

    println!("ok: {} resources in {}", catalog.len(), args.path.display());
    Ok(())
}
