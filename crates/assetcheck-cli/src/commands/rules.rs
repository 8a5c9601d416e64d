//! Rules command implementation
//!
//! Prints the rule table configured in a settings file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use assetcheck_naming::{Rule, ValidationSettings};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::OutputFormat;

/// JSON output entry for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Type the rule is registered on.
    pub type_name: String,
    /// Required prefix (empty when not enforced).
    pub prefix: String,
    /// Required postfix (empty when not enforced).
    pub postfix: String,
    /// Whether the rule is enforced at all.
    pub enforced: bool,
}

/// JSON output for the rules command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesOutput {
    pub rules: Vec<RuleEntry>,
    pub special_case_markers: Vec<String>,
    pub include_paths: Vec<String>,
}

/// Collects the rules configured in `settings`, sorted by type name.
pub fn collect(settings: &ValidationSettings) -> Result<RulesOutput> {
    let table = settings.rule_table().context("Invalid validation settings")?;
    let rules = table
        .entries()
        .into_iter()
        .map(|(type_name, rule)| entry(type_name, rule))
        .collect();

    Ok(RulesOutput {
        rules,
        special_case_markers: settings.special_case_markers.clone(),
        include_paths: settings.include_paths.clone(),
    })
}

fn entry(type_name: &str, rule: &Rule) -> RuleEntry {
    RuleEntry {
        type_name: type_name.to_string(),
        prefix: rule.prefix.clone(),
        postfix: rule.postfix.clone(),
        enforced: rule.is_enforced(),
    }
}

/// Run the rules command.
pub fn run(settings_path: &str, format: OutputFormat) -> Result<ExitCode> {
    let settings = ValidationSettings::from_file(Path::new(settings_path))
        .with_context(|| format!("Failed to load settings: {}", settings_path))?;
    let output = collect(&settings)?;

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialize rules")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text_output(&output),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_text_output(output: &RulesOutput) {
    println!("{}", "Naming rules:".cyan().bold());
    if output.rules.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for rule in &output.rules {
        let postfix = if rule.postfix.is_empty() {
            String::new()
        } else {
            format!(" ... {}", rule.postfix)
        };
        let line = format!("  {:<32} {}{}", rule.type_name, rule.prefix, postfix);
        if rule.enforced {
            println!("{}", line);
        } else {
            println!("{} {}", line.dimmed(), "(not enforced)".dimmed());
        }
    }

    if !output.special_case_markers.is_empty() {
        println!(
            "\n{} {}",
            "Markers:".cyan().bold(),
            output.special_case_markers.join(", ")
        );
    }
    if !output.include_paths.is_empty() {
        println!(
            "{} {}",
            "Include paths:".cyan().bold(),
            output.include_paths.join(", ")
        );
    }
}
