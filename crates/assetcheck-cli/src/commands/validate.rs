//! Validate command implementation
//!
//! Loads settings and an asset manifest, runs every enabled validator and
//! reports per-asset diagnostics.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use assetcheck_naming::{
    AssetReport, BatchReport, Diagnostic, Manifest, Severity, ValidationOutcome,
    ValidationSettings, ValidatorRegistry,
};
use colored::Colorize;
use tracing::info;

use super::OutputFormat;

/// Options for the validate command.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions<'a> {
    /// Fail on warnings in addition to invalid assets.
    pub strict: bool,
    /// Validator IDs to disable.
    pub disable: &'a [String],
    /// If provided, only run these validators (comma-separated).
    pub only: Option<&'a str>,
}

/// Loads inputs and produces the batch report.
pub fn build_report(
    settings_path: &Path,
    manifest_path: &Path,
    options: &ValidateOptions<'_>,
) -> Result<BatchReport> {
    let settings = ValidationSettings::from_file(settings_path)
        .with_context(|| format!("Failed to load settings: {}", settings_path.display()))?;
    let manifest = Manifest::from_file(manifest_path)
        .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;
    let assets = manifest
        .assets()
        .with_context(|| format!("Invalid manifest: {}", manifest_path.display()))?;

    let mut registry =
        ValidatorRegistry::with_settings(&settings).context("Invalid validation settings")?;
    for id in options.disable {
        registry.disable(id);
    }
    if let Some(only) = options.only {
        let ids: Vec<&str> = only.split(',').map(|s| s.trim()).collect();
        registry.enable_only(&ids);
    }

    info!(assets = assets.len(), validators = registry.len(), "validating");
    Ok(registry.validate_all(&assets))
}

/// Returns true if the report passes (no invalid assets; no warnings when strict).
pub fn is_success(report: &BatchReport, strict: bool) -> bool {
    report.ok && !(strict && report.has_warnings())
}

/// Run the validate command.
///
/// # Returns
/// Exit code: 0 if passed, 1 if any asset is invalid (or has warnings in strict mode)
pub fn run(
    settings_path: &str,
    manifest_path: &str,
    options: &ValidateOptions<'_>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let report = build_report(Path::new(settings_path), Path::new(manifest_path), options)?;
    let success = is_success(&report, options.strict);

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text_output(manifest_path, &report, success),
    }

    if success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Print results in human-readable text format.
fn print_text_output(manifest_path: &str, report: &BatchReport, success: bool) {
    println!("{} {}", "Validating:".cyan().bold(), manifest_path);

    for asset in &report.assets {
        print_asset(asset);
    }

    let s = &report.summary;
    let summary = format!(
        "{} valid, {} invalid, {} not validated; {} error(s), {} warning(s)",
        s.valid, s.invalid, s.not_validated, s.error_count, s.warning_count
    );

    if success {
        println!("\n{} {}", "PASSED".green().bold(), summary.dimmed());
    } else {
        println!("\n{} {}", "FAILED".red().bold(), summary.dimmed());
    }
}

fn print_asset(asset: &AssetReport) {
    let status = match asset.outcome {
        ValidationOutcome::Valid if asset.diagnostics.is_empty() => return,
        ValidationOutcome::Valid => "valid".green(),
        ValidationOutcome::Invalid => "invalid".red().bold(),
        ValidationOutcome::NotValidated => return,
    };

    println!("\n{} {} {}", asset.name.bold(), asset.path.dimmed(), status);
    for diagnostic in &asset.diagnostics {
        print_diagnostic(diagnostic);
    }
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    let marker = match diagnostic.severity {
        Severity::Error => "x".red(),
        Severity::Warning => "!".yellow(),
    };
    println!(
        "  {} [{}]: {}",
        marker,
        diagnostic.code.cyan(),
        diagnostic.message
    );
}
