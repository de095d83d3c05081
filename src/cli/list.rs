use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::ResourceCatalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct ListArgs {
    /// Path to a custom dataset file (CSV, TSV, or JSON)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Print names only, without the full descriptions
    #[arg(long)]
    pub names_only: bool,
}

/// Execute list subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ListArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(args.data.as_deref(), verbose)?;

    match format {
        OutputFormat::Text => print_text(&catalog, args.names_only),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(catalog.resources())?),
        OutputFormat::Tsv => print_tsv(&catalog),
    }

    Ok(())
}

fn print_text(catalog: &ResourceCatalog, names_only: bool) {
    for resource in catalog.resources() {
        if names_only {
            println!("- {}", resource.name);
        } else {
            println!("{}", resource.describe());
        }
    }
}

fn print_tsv(catalog: &ResourceCatalog) {
    println!("name\tlocation\tmin_y\tmax_y\trequired_tool\tmethod");
    for r in catalog.resources() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            r.name, r.location, r.depth_range.min, r.depth_range.max, r.required_tool, r.method
        );
    }
}
