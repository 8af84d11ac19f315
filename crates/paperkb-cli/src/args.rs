//! Command-line parsing.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the corpus and merge new records into the store.
    Run {
        data_dir: Option<PathBuf>,
        dry_run: bool,
        json: bool,
    },
    /// Load the store and report whether it is readable.
    Validate { data_dir: Option<PathBuf> },
    Help,
}

/// Parse everything after the program name.
pub fn parse(args: &[String]) -> Result<Command, String> {
    match args.first().map(String::as_str) {
        Some("--help" | "-h" | "help") => Ok(Command::Help),
        Some("--validate" | "validate") => match &args[1..] {
            [] => Ok(Command::Validate { data_dir: None }),
            [dir] => Ok(Command::Validate {
                data_dir: Some(PathBuf::from(dir)),
            }),
            _ => Err("Usage: paperkb validate [data-dir]".into()),
        },
        _ => {
            let mut data_dir = None;
            let mut dry_run = false;
            let mut json = false;
            for arg in args {
                match arg.as_str() {
                    "--dry-run" => dry_run = true,
                    "--json" => json = true,
                    flag if flag.starts_with('-') => {
                        return Err(format!(
                            "Unknown option: {}. Use 'paperkb help' for usage.",
                            flag
                        ))
                    }
                    dir if data_dir.is_none() => data_dir = Some(PathBuf::from(dir)),
                    extra => {
                        return Err(format!(
                            "Unexpected argument: {}. Use 'paperkb help' for usage.",
                            extra
                        ))
                    }
                }
            }
            Ok(Command::Run {
                data_dir,
                dry_run,
                json,
            })
        }
    }
}
