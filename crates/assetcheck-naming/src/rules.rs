//! Per-type prefix/postfix rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Required prefix and postfix for assets of one type.
///
/// An empty string means the part is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Required leading text (case-sensitive).
    #[serde(default)]
    pub prefix: String,
    /// Required trailing text (case-sensitive).
    #[serde(default)]
    pub postfix: String,
}

impl Rule {
    /// Creates a rule with both parts.
    pub fn new(prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            postfix: postfix.into(),
        }
    }

    /// Creates a prefix-only rule.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::new(prefix, "")
    }

    /// Returns true if this rule enforces anything.
    ///
    /// A rule with an empty prefix is never enforced, even when a postfix is set.
    pub fn is_enforced(&self) -> bool {
        !self.prefix.is_empty()
    }
}

/// Mapping from type name to its naming rule.
///
/// Lookups are by exact type name; the table is read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: HashMap<String, Rule>,
}

impl RuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the rule for `type_name`.
    pub fn insert(&mut self, type_name: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(type_name.into(), rule)
    }

    /// Returns the rule registered for exactly `type_name`.
    pub fn lookup(&self, type_name: &str) -> Option<&Rule> {
        self.rules.get(type_name)
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns all entries sorted by type name.
    pub fn entries(&self) -> Vec<(&str, &Rule)> {
        let mut entries: Vec<_> = self
            .rules
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>> FromIterator<(K, Rule)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
