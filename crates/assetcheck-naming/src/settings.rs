//! Validation settings loaded from the host's configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::checker::default_markers;
use crate::entries::Entries;
use crate::rules::{Rule, RuleTable};

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("failed to read settings {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings are not valid JSON for this schema.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rule is registered under an empty type name.
    #[error("asset_prefix_rules contains an empty type name")]
    EmptyTypeName,

    /// The same type name is given more than one rule.
    #[error("asset_prefix_rules lists type '{0}' more than once")]
    DuplicateType(String),
}

/// Naming-validation settings.
///
/// ```json
/// {
///   "asset_prefix_rules": { "Blueprint": { "prefix": "BP_" } },
///   "special_case_markers": ["DEPRECATED_", "NC_"],
///   "include_paths": ["/Game/"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSettings {
    /// Naming rule per type name.
    pub asset_prefix_rules: BTreeMap<String, Rule>,

    /// Leading markers skipped before the prefix comparison, in precedence order.
    pub special_case_markers: Vec<String>,

    /// Package path prefixes in scope for validation. Empty means every path.
    /// A prefix matches whole path segments only: `/Game` covers `/Game/Maps`
    /// but not `/GameOther`.
    pub include_paths: Vec<String>,
}

/// On-disk shape of [`ValidationSettings`], keeping repeated rule keys.
#[derive(Deserialize)]
struct RawSettings {
    #[serde(default)]
    asset_prefix_rules: Entries<Rule>,
    #[serde(default = "default_markers")]
    special_case_markers: Vec<String>,
    #[serde(default)]
    include_paths: Vec<String>,
}

impl ValidationSettings {
    /// Parses settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings = serde_json::from_str(json)?;
        let asset_prefix_rules = raw
            .asset_prefix_rules
            .into_unique_map()
            .map_err(ConfigError::DuplicateType)?;
        Ok(Self {
            asset_prefix_rules,
            special_case_markers: raw.special_case_markers,
            include_paths: raw.include_paths,
        })
    }

    /// Reads settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Builds the rule table from `asset_prefix_rules`.
    pub fn rule_table(&self) -> Result<RuleTable, ConfigError> {
        if self.asset_prefix_rules.keys().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::EmptyTypeName);
        }
        Ok(self
            .asset_prefix_rules
            .iter()
            .map(|(name, rule)| (name.clone(), rule.clone()))
            .collect())
    }
}

/// Returns true if `package_path` lies under one of `include_paths`, or if
/// `include_paths` is empty.
pub(crate) fn path_in_scope(include_paths: &[String], package_path: &str) -> bool {
    include_paths.is_empty()
        || include_paths
            .iter()
            .any(|prefix| is_under(prefix, package_path))
}

/// Returns true if `path` equals `prefix` or continues it at a `/` boundary.
fn is_under(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => prefix.ends_with('/') || rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            asset_prefix_rules: BTreeMap::new(),
            special_case_markers: default_markers(),
            include_paths: Vec::new(),
        }
    }
}
