//! PaperKB — builds an entity/event knowledge base from a paper corpus.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;
mod report;

use args::Command;
use paperkb_core::PaperKbConfig;
use paperkb_extract::Lexicon;
use paperkb_runtime::{Orchestrator, RunOptions};

fn resolve_data_dir(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| std::env::var("PAPERKB_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn print_help() {
    println!("PaperKB — knowledge base builder for research paper collections");
    println!();
    println!("Usage: paperkb [data-dir] [--dry-run] [--json]");
    println!("       paperkb <command>");
    println!();
    println!("Commands:");
    println!("  (none)                   Fetch papers and merge new entities/events");
    println!("  validate [data-dir]      Check that the stored JSON files load");
    println!("  help                     Show this help message");
    println!();
    println!("Options:");
    println!("  --dry-run                Run every stage but do not write the store");
    println!("  --json                   Print the run report as JSON");
    println!();
    println!("Environment:");
    println!("  PAPERKB_DATA_DIR         Data directory (default: data)");
    println!("  PAPERKB_SOURCE_URL       Point store URL (default: http://localhost:6333)");
    println!("  PAPERKB_COLLECTION       Paper collection (default: papers)");
    println!("  PAPERKB_PAGE_SIZE        Points per scroll page (default: 100)");
    println!("  PAPERKB_LEXICON          JSON file overriding the built-in dictionaries");
    println!("  RUST_LOG                 Log filter (default: info)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let command = match args::parse(&argv) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };

    let (data_dir, dry_run, json) = match command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Validate { data_dir } => {
            let report = report::validate(&resolve_data_dir(data_dir));
            report::print_validation(&report);
            std::process::exit(if report.is_valid() { 0 } else { 1 });
        }
        Command::Run {
            data_dir,
            dry_run,
            json,
        } => (resolve_data_dir(data_dir), dry_run, json),
    };

    info!("Data directory: {}", data_dir.display());

    let config = PaperKbConfig::from_env(&data_dir);

    let lexicon = match &config.lexicon_file {
        Some(path) => {
            info!("Loading lexicon from {}", path.display());
            Lexicon::load(path)?
        }
        None => Lexicon::builtin(),
    };

    let orchestrator = Orchestrator::from_config(&config, &lexicon)?;
    let run = orchestrator
        .run(RunOptions { dry_run })
        .await
        .context("Knowledge-base update failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        report::print_run(&run);
    }

    Ok(())
}
