//! assetcheck CLI - asset naming validation
//!
//! Validates asset names from a manifest against the configured naming rules.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use assetcheck_cli::commands::{self, validate::ValidateOptions, OutputFormat};
use assetcheck_cli::logging;

/// assetcheck - Asset Naming Validation
#[derive(Parser)]
#[command(name = "assetcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the assets listed in a manifest
    Validate {
        /// Path to the validation settings file (JSON)
        #[arg(short, long)]
        settings: String,

        /// Path to the asset manifest file (JSON)
        #[arg(short, long)]
        manifest: String,

        /// Fail on warnings in addition to invalid assets
        #[arg(long)]
        strict: bool,

        /// Validator IDs to disable (repeatable)
        #[arg(long)]
        disable: Vec<String>,

        /// Only run these validators (comma-separated IDs)
        #[arg(long)]
        only: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the naming rules configured in a settings file
    Rules {
        /// Path to the validation settings file (JSON)
        #[arg(short, long)]
        settings: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            settings,
            manifest,
            strict,
            disable,
            only,
            json,
        } => {
            let options = ValidateOptions {
                strict,
                disable: &disable,
                only: only.as_deref(),
            };
            commands::validate::run(
                &settings,
                &manifest,
                &options,
                OutputFormat::from_json_flag(json),
            )
        }
        Commands::Rules { settings, json } => {
            commands::rules::run(&settings, OutputFormat::from_json_flag(json))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
