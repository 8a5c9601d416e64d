//! Diagnostics, outcomes and batch report types.

use serde::{Deserialize, Serialize};

/// Stable diagnostic codes.
pub mod codes {
    /// Name fails the structural underscore/uppercase convention.
    pub const STRUCTURE: &str = "naming/structure";
    /// Name does not start with the prefix required for its type.
    pub const PREFIX: &str = "naming/prefix";
    /// Name does not end with the postfix required for its type.
    pub const POSTFIX: &str = "naming/postfix";
    /// No rule exists anywhere in the type's hierarchy.
    pub const NO_CONVENTION: &str = "naming/no-convention";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported but does not fail the asset.
    Warning,
    /// Fails the asset.
    Error,
}

/// A single message produced while validating one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic code (e.g., "naming/prefix").
    pub code: String,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(code: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity,
            message: message.into(),
        }
    }

    /// Creates an error-level diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, message)
    }

    /// Creates a warning-level diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Warning, message)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Append-only accumulator of diagnostics for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Appends an error-level diagnostic.
    pub fn add_error(&mut self, code: &str, message: impl Into<String>) {
        self.add(Diagnostic::error(code, message));
    }

    /// Appends a warning-level diagnostic.
    pub fn add_warning(&mut self, code: &str, message: impl Into<String>) {
        self.add(Diagnostic::warning(code, message));
    }

    /// Returns the diagnostics collected so far, in insertion order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the context, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Returns true if any error-level diagnostic was added.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns true if any warning-level diagnostic was added.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Returns true if nothing was added.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Tri-state result handed back to the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid,
    /// The asset was out of scope for every validator.
    NotValidated,
}

impl ValidationOutcome {
    /// Combines the outcomes of two validators run on the same asset.
    ///
    /// `Invalid` dominates, then `Valid`; `NotValidated` is the identity.
    pub fn combine(self, other: Self) -> Self {
        use ValidationOutcome::*;
        match (self, other) {
            (Invalid, _) | (_, Invalid) => Invalid,
            (Valid, _) | (_, Valid) => Valid,
            (NotValidated, NotValidated) => NotValidated,
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValidationOutcome::Valid => "valid",
            ValidationOutcome::Invalid => "invalid",
            ValidationOutcome::NotValidated => "not validated",
        };
        f.write_str(s)
    }
}

/// Result of validating a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetReport {
    /// Asset name.
    pub name: String,
    /// Package path of the asset.
    pub path: String,
    /// Combined outcome of all validators that ran.
    pub outcome: ValidationOutcome,
    /// Diagnostics from all validators, in run order.
    pub diagnostics: Vec<Diagnostic>,
}

impl AssetReport {
    /// Returns the number of diagnostics at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Summary statistics for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Assets that passed every validator that ran.
    pub valid: usize,
    /// Assets that failed at least one validator.
    pub invalid: usize,
    /// Assets no validator applied to.
    pub not_validated: usize,
    /// Error-level diagnostics across all assets.
    pub error_count: usize,
    /// Warning-level diagnostics across all assets.
    pub warning_count: usize,
}

/// Complete report for a batch of assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// True if no asset is invalid.
    pub ok: bool,
    /// Per-asset results in input order.
    pub assets: Vec<AssetReport>,
    /// Summary statistics.
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self {
            ok: true,
            assets: Vec::new(),
            summary: BatchSummary::default(),
        }
    }

    /// Adds an asset result and updates the summary.
    pub fn add(&mut self, report: AssetReport) {
        match report.outcome {
            ValidationOutcome::Valid => self.summary.valid += 1,
            ValidationOutcome::Invalid => {
                self.summary.invalid += 1;
                self.ok = false;
            }
            ValidationOutcome::NotValidated => self.summary.not_validated += 1,
        }
        self.summary.error_count += report.count(Severity::Error);
        self.summary.warning_count += report.count(Severity::Warning);
        self.assets.push(report);
    }

    /// Returns true if any warning was reported.
    pub fn has_warnings(&self) -> bool {
        self.summary.warning_count > 0
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}
