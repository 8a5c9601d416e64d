//! Prefix/postfix enforcement for a resolved rule.

use tracing::debug;

use crate::hierarchy::Resolution;
use crate::report::{codes, ValidationContext};

/// Marker for assets kept only for backwards compatibility.
pub const DEPRECATED_MARKER: &str = "DEPRECATED_";

/// Marker for assets that may not ship in commercial builds.
pub const NONCOMMERCIAL_MARKER: &str = "NC_";

/// Returns the default special-case markers, in precedence order.
pub fn default_markers() -> Vec<String> {
    vec![DEPRECATED_MARKER.to_string(), NONCOMMERCIAL_MARKER.to_string()]
}

/// Checks a name against the rule resolved for its type.
///
/// Leading special-case markers are skipped before the prefix comparison, so
/// `DEPRECATED_BP_Door` satisfies a `BP_` prefix rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRuleChecker {
    markers: Vec<String>,
}

impl NameRuleChecker {
    /// Creates a checker with the given markers, earlier markers taking precedence.
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// Returns the byte offset at which the prefix comparison starts.
    ///
    /// Only the first matching marker is stripped.
    pub fn marker_offset(&self, name: &str) -> usize {
        self.markers
            .iter()
            .filter(|m| !m.is_empty())
            .find(|m| name.starts_with(m.as_str()))
            .map_or(0, |m| {
                debug!(name, marker = %m, "skipping special-case marker");
                m.len()
            })
    }

    /// Returns true if `name` satisfies the resolved rule.
    ///
    /// A missing rule or a rule with an empty prefix always passes. A failed
    /// prefix check is reported alone; the postfix is only checked once the
    /// prefix matched.
    pub fn check(&self, name: &str, resolution: Resolution<'_>, ctx: &mut ValidationContext) -> bool {
        let (rule, matched_type) = match resolution {
            Resolution::Found { rule, matched_type } => (rule, matched_type),
            Resolution::NotFound => return true,
        };

        if !rule.is_enforced() {
            debug!(name, matched_type, "rule has no prefix, nothing to enforce");
            return true;
        }

        let offset = self.marker_offset(name);
        if !name[offset..].starts_with(rule.prefix.as_str()) {
            ctx.add_error(
                codes::PREFIX,
                format!(
                    "asset of type '{}' must start with prefix '{}'",
                    matched_type, rule.prefix
                ),
            );
            return false;
        }

        if !rule.postfix.is_empty() && !name.ends_with(rule.postfix.as_str()) {
            ctx.add_error(
                codes::POSTFIX,
                format!(
                    "asset of type '{}' must end with postfix '{}'",
                    matched_type, rule.postfix
                ),
            );
            return false;
        }

        true
    }
}

impl Default for NameRuleChecker {
    fn default() -> Self {
        Self::new(default_markers())
    }
}
