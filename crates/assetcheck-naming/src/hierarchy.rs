//! Type descriptors and inheritance-aware rule lookup.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::report::{codes, ValidationContext};
use crate::rules::{Rule, RuleTable};

/// Runtime type of an asset together with its precomputed ancestry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// The concrete type name.
    pub name: String,
    /// Ancestor type names, closest first; the root comes last.
    #[serde(default)]
    pub ancestors: Vec<String>,
    /// Authored type for instances of a generic container type, such as the
    /// generated class of a blueprint asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// Creates a descriptor from a type name and its ancestors (closest first).
    pub fn new<I, S>(name: impl Into<String>, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ancestors: ancestors.into_iter().map(Into::into).collect(),
            declared_type: None,
        }
    }

    /// Sets the declared type.
    pub fn with_declared_type(mut self, declared: TypeDescriptor) -> Self {
        self.declared_type = Some(Box::new(declared));
        self
    }

    /// Iterates the type itself followed by its ancestors, most-derived first.
    pub fn lineage(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.ancestors.iter().map(String::as_str))
    }

    /// Returns the type whose lineage is walked first during resolution.
    pub fn effective_type(&self) -> &TypeDescriptor {
        self.declared_type.as_deref().unwrap_or(self)
    }
}

/// Outcome of resolving a type against a [`RuleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// A rule was found.
    Found {
        /// The resolved rule.
        rule: &'a Rule,
        /// The type the rule is registered on.
        matched_type: &'a str,
    },
    /// No type in the lineage (or fallback) has a rule.
    NotFound,
}

/// Walks a type's lineage to find the most-derived type with a rule.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyResolver<'t> {
    table: &'t RuleTable,
}

impl<'t> HierarchyResolver<'t> {
    /// Creates a resolver over `table`.
    pub fn new(table: &'t RuleTable) -> Self {
        Self { table }
    }

    /// Resolves the rule that governs `entity`.
    ///
    /// With a declared type, its lineage is walked instead of the runtime
    /// type's; the runtime type itself is then tried as a fallback. When nothing
    /// matches, a `naming/no-convention` warning is added to `ctx`.
    pub fn resolve<'a>(
        &self,
        entity: &'a TypeDescriptor,
        ctx: &mut ValidationContext,
    ) -> Resolution<'a>
    where
        't: 'a,
    {
        let start = entity.effective_type();

        for type_name in start.lineage() {
            trace!(type_name, "probing rule table");
            if let Some(rule) = self.table.lookup(type_name) {
                debug!(asset_type = %entity.name, matched_type = type_name, "resolved naming rule");
                return Resolution::Found {
                    rule,
                    matched_type: type_name,
                };
            }
        }

        if entity.declared_type.is_some() {
            if let Some(rule) = self.table.lookup(&entity.name) {
                debug!(
                    asset_type = %entity.name,
                    declared_type = %start.name,
                    "resolved naming rule on container type"
                );
                return Resolution::Found {
                    rule,
                    matched_type: &entity.name,
                };
            }
        }

        ctx.add_warning(
            codes::NO_CONVENTION,
            format!("no naming convention defined for type '{}'", start.name),
        );
        Resolution::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn table(entries: &[(&str, Rule)]) -> RuleTable {
        entries.iter().cloned().collect()
    }

    fn matched<'a>(resolution: Resolution<'a>) -> Option<(&'a Rule, &'a str)> {
        match resolution {
            Resolution::Found { rule, matched_type } => Some((rule, matched_type)),
            Resolution::NotFound => None,
        }
    }

    #[test]
    fn test_most_derived_rule_wins() {
        let table = table(&[
            ("Base", Rule::prefix("B_")),
            ("Root", Rule::prefix("R_")),
        ]);
        let entity = TypeDescriptor::new("Derived", ["Base", "Root"]);
        let mut ctx = ValidationContext::new();

        let (rule, ty) = matched(HierarchyResolver::new(&table).resolve(&entity, &mut ctx)).unwrap();
        assert_eq!(rule, &Rule::prefix("B_"));
        assert_eq!(ty, "Base");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_own_type_checked_first() {
        let table = table(&[
            ("Derived", Rule::prefix("D_")),
            ("Base", Rule::prefix("B_")),
        ]);
        let entity = TypeDescriptor::new("Derived", ["Base"]);
        let mut ctx = ValidationContext::new();

        let (_, ty) = matched(HierarchyResolver::new(&table).resolve(&entity, &mut ctx)).unwrap();
        assert_eq!(ty, "Derived");
    }

    #[test]
    fn test_declared_type_walked_instead_of_runtime_type() {
        let table = table(&[
            ("Blueprint", Rule::prefix("BP_")),
            ("Widget", Rule::prefix("WBP_")),
        ]);
        let entity = TypeDescriptor::new("Blueprint", ["Object"])
            .with_declared_type(TypeDescriptor::new("MainMenu_C", ["Widget", "Object"]));
        let mut ctx = ValidationContext::new();

        let (rule, ty) = matched(HierarchyResolver::new(&table).resolve(&entity, &mut ctx)).unwrap();
        assert_eq!(rule, &Rule::prefix("WBP_"));
        assert_eq!(ty, "Widget");
    }

    #[test]
    fn test_declared_type_falls_back_to_runtime_type() {
        let table = table(&[("Blueprint", Rule::prefix("BP_"))]);
        let entity = TypeDescriptor::new("Blueprint", ["Object"])
            .with_declared_type(TypeDescriptor::new("Enemy_C", ["Pawn", "Actor", "Object"]));
        let mut ctx = ValidationContext::new();

        let (rule, ty) = matched(HierarchyResolver::new(&table).resolve(&entity, &mut ctx)).unwrap();
        assert_eq!(rule, &Rule::prefix("BP_"));
        assert_eq!(ty, "Blueprint");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_runtime_ancestors_skipped_with_declared_type() {
        // Only the runtime type itself is a fallback, not its ancestors.
        let table = table(&[("Object", Rule::prefix("O_"))]);
        let entity = TypeDescriptor::new("Blueprint", ["Object"])
            .with_declared_type(TypeDescriptor::new("Enemy_C", ["Pawn"]));
        let mut ctx = ValidationContext::new();

        let resolution = HierarchyResolver::new(&table).resolve(&entity, &mut ctx);
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[test]
    fn test_not_found_reports_warning() {
        let table = table(&[("Texture2D", Rule::prefix("T_"))]);
        let entity = TypeDescriptor::new("SoundWave", ["SoundBase", "Object"]);
        let mut ctx = ValidationContext::new();

        let resolution = HierarchyResolver::new(&table).resolve(&entity, &mut ctx);
        assert_eq!(resolution, Resolution::NotFound);
        assert_eq!(ctx.diagnostics().len(), 1);

        let diag = &ctx.diagnostics()[0];
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.code, codes::NO_CONVENTION);
        assert_eq!(diag.message, "no naming convention defined for type 'SoundWave'");
    }

    #[test]
    fn test_lineage_most_derived_first() {
        let ty = TypeDescriptor::new("Pawn", ["Actor", "Object"]);
        assert_eq!(ty.lineage().collect::<Vec<_>>(), vec!["Pawn", "Actor", "Object"]);
    }
}
