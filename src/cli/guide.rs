use std::path::PathBuf;

use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::catalog::store::ResourceCatalog;
use crate::matching::engine::{LookupEngine, LookupOutcome};

const BANNER: &str = r"
  ___  ____  ____     ___  _   _ ___ ____  _____
 / _ \|  _ \| ____|  / __|| | | |_ _|  _ \| ____|
| | | | |_) |  _|   | | _ | | | || || | | |  _|
| |_| |  _ <| |___  | |_| | |_| || || |_| | |___
 \___/|_| \_\_____|  \____|\___/|___|____/|_____|
";

#[derive(Args)]
pub struct GuideArgs {
    /// Path to a custom dataset file (CSV, TSV, or JSON)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Execute guide subcommand: the interactive lookup session.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the line editor
/// cannot be initialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GuideArgs, verbose: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(args.data.as_deref(), verbose)?;
    let engine = LookupEngine::new(&catalog);

    if !args.no_banner {
        println!("{BANNER}");
    }
    println!("Welcome to the ore guide!");
    println!("Type a resource name (e.g. 'Diamond Ore') to find out where it spawns.");
    println!("Type 'exit' to quit.\n");

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("ore> ") {
            Ok(line) => {
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
                    break;
                }

                let _ = editor.add_history_entry(query);
                answer(&engine, &catalog, query);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("\nThanks for using the ore guide!");
    Ok(())
}

fn answer(engine: &LookupEngine<'_>, catalog: &ResourceCatalog, query: &str) {
    let outcome = engine.lookup(query);
    println!("\n{}\n", LookupEngine::render(&outcome));

    // A miss gets the full menu so the user can retype
    if matches!(outcome, LookupOutcome::NotFound) {
        println!("Available resources:");
        for name in catalog.names() {
            println!("- {name}");
        }
        println!();
    }
}
