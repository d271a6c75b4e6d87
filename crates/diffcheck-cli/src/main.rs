//! diffcheck CLI
//!
//! Command-line front end for the diff engine. Exits 0 when the inputs are
//! equal, 1 when a difference was reported and 2 on error.

use clap::{Parser, Subcommand, ValueEnum};
use diffcheck_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "diffcheck")]
#[command(about = "diffcheck - expected vs. actual structural diffs", long_about = None)]
struct Cli {
    /// Report configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable logging to stderr
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable, debug level
    Dev,
    /// JSON, info level
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two text files line by line
    Lines(commands::lines::LinesArgs),
    /// Compare two JSON documents structurally
    Json(commands::json::JsonArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile.into());
    }

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Lines(args) => commands::lines::execute(args, &config),
        Commands::Json(args) => commands::json::execute(args, &config),
    });

    match result {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
