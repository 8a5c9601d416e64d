//! Validator capability trait and the asset-name validator.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checker::NameRuleChecker;
use crate::hierarchy::{HierarchyResolver, TypeDescriptor};
use crate::pattern::matches_naming_pattern;
use crate::report::{codes, ValidationContext, ValidationOutcome};
use crate::rules::RuleTable;
use crate::settings::{path_in_scope, ConfigError, ValidationSettings};

/// Message reported when a name fails the structural convention.
pub const STRUCTURE_MESSAGE: &str = "The asset is not following the naming conventions. \
All underscores must be followed by an upper case letter or a digit. \
Also, all assets must start with an upper case letter.";

/// An asset as seen by validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetData {
    /// Asset name (e.g., "BP_Enemy").
    pub name: String,
    /// Package path (e.g., "/Game/AI/BP_Enemy").
    pub package_path: String,
    /// Runtime type of the loaded object; `None` when the object is not loaded.
    pub class: Option<TypeDescriptor>,
}

impl AssetData {
    /// Creates data for a loaded asset.
    pub fn new(name: impl Into<String>, package_path: impl Into<String>, class: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            package_path: package_path.into(),
            class: Some(class),
        }
    }

    /// Creates data for an asset whose object is not loaded.
    pub fn unloaded(name: impl Into<String>, package_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_path: package_path.into(),
            class: None,
        }
    }
}

/// A validator that can be run by the host's validation pipeline.
pub trait AssetValidator: Send + Sync {
    /// Unique identifier (e.g., "naming/asset-name").
    fn id(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Returns true if this validator applies to `asset`.
    fn can_validate(&self, asset: &AssetData) -> bool;

    /// Validates `asset`, appending diagnostics to `ctx`.
    fn validate(&self, asset: &AssetData, ctx: &mut ValidationContext) -> ValidationOutcome;
}

/// Checks asset names against the structural convention and per-type rules.
#[derive(Debug, Clone)]
pub struct AssetNameValidator {
    table: RuleTable,
    checker: NameRuleChecker,
    include_paths: Vec<String>,
}

impl AssetNameValidator {
    pub const ID: &'static str = "naming/asset-name";

    /// Creates a validator over `table` that applies to every path.
    pub fn new(table: RuleTable, checker: NameRuleChecker) -> Self {
        Self {
            table,
            checker,
            include_paths: Vec::new(),
        }
    }

    /// Creates a validator from loaded settings.
    pub fn from_settings(settings: &ValidationSettings) -> Result<Self, ConfigError> {
        let table = settings.rule_table()?;
        let checker = NameRuleChecker::new(settings.special_case_markers.clone());
        Ok(Self::new(table, checker).with_include_paths(settings.include_paths.clone()))
    }

    /// Restricts the validator to package paths starting with one of `paths`.
    pub fn with_include_paths(mut self, paths: Vec<String>) -> Self {
        self.include_paths = paths;
        self
    }

    /// Returns the rule table.
    pub fn rule_table(&self) -> &RuleTable {
        &self.table
    }

    fn check_structure(&self, name: &str, ctx: &mut ValidationContext) -> bool {
        if matches_naming_pattern(name) {
            return true;
        }
        ctx.add_error(codes::STRUCTURE, STRUCTURE_MESSAGE);
        false
    }
}

impl AssetValidator for AssetNameValidator {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        "Asset names follow the naming convention and the prefix/postfix rule of their type"
    }

    fn can_validate(&self, asset: &AssetData) -> bool {
        if asset.class.is_none() || asset.name.is_empty() {
            debug!(name = %asset.name, "asset not loaded, skipping");
            return false;
        }
        if !path_in_scope(&self.include_paths, &asset.package_path) {
            debug!(path = %asset.package_path, "asset outside include paths, skipping");
            return false;
        }
        true
    }

    fn validate(&self, asset: &AssetData, ctx: &mut ValidationContext) -> ValidationOutcome {
        let Some(class) = asset.class.as_ref() else {
            return ValidationOutcome::NotValidated;
        };

        // Both checks always run so every violation is reported.
        let structure_ok = self.check_structure(&asset.name, ctx);
        let resolution = HierarchyResolver::new(&self.table).resolve(class, ctx);
        let rule_ok = self.checker.check(&asset.name, resolution, ctx);

        if structure_ok && rule_ok {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::rules::Rule;
    use pretty_assertions::assert_eq;

    fn validator() -> AssetNameValidator {
        let table: RuleTable = [
            ("Blueprint", Rule::prefix("BP_")),
            ("Widget", Rule::prefix("WBP_")),
            ("Texture2D", Rule::prefix("T_")),
            ("GameMode", Rule::new("BP_", "_GameMode")),
        ]
        .into_iter()
        .collect();
        AssetNameValidator::new(table, NameRuleChecker::default())
    }

    fn texture(name: &str) -> AssetData {
        AssetData::new(
            name,
            format!("/Game/Textures/{name}"),
            TypeDescriptor::new("Texture2D", ["Texture", "Object"]),
        )
    }

    #[test]
    fn test_valid_asset() {
        let mut ctx = ValidationContext::new();
        assert_eq!(
            validator().validate(&texture("T_Rock_D"), &mut ctx),
            ValidationOutcome::Valid
        );
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_structure_and_prefix_both_reported() {
        let mut ctx = ValidationContext::new();
        let outcome = validator().validate(&texture("rock_diffuse"), &mut ctx);

        assert_eq!(outcome, ValidationOutcome::Invalid);
        let found: Vec<&str> = ctx.diagnostics().iter().map(|d| d.code.as_str()).collect();
        assert_eq!(found, vec![codes::STRUCTURE, codes::PREFIX]);
        assert_eq!(ctx.diagnostics()[0].message, STRUCTURE_MESSAGE);
    }

    #[test]
    fn test_structure_failure_alone_is_invalid() {
        let mut ctx = ValidationContext::new();
        let outcome = validator().validate(&texture("T_rock"), &mut ctx);
        assert_eq!(outcome, ValidationOutcome::Invalid);
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].code, codes::STRUCTURE);
    }

    #[test]
    fn test_no_convention_is_not_invalid() {
        let asset = AssetData::new(
            "Explosion",
            "/Game/Audio/Explosion",
            TypeDescriptor::new("SoundWave", ["SoundBase", "Object"]),
        );
        let mut ctx = ValidationContext::new();

        assert_eq!(validator().validate(&asset, &mut ctx), ValidationOutcome::Valid);
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_blueprint_uses_declared_type() {
        let class = TypeDescriptor::new("Blueprint", ["Object"])
            .with_declared_type(TypeDescriptor::new("MainMenu_C", ["Widget", "Object"]));
        let mut ctx = ValidationContext::new();

        let asset = AssetData::new("BP_MainMenu", "/Game/UI/BP_MainMenu", class.clone());
        assert_eq!(validator().validate(&asset, &mut ctx), ValidationOutcome::Invalid);
        assert_eq!(
            ctx.diagnostics()[0].message,
            "asset of type 'Widget' must start with prefix 'WBP_'"
        );

        let mut ctx = ValidationContext::new();
        let asset = AssetData::new("WBP_MainMenu", "/Game/UI/WBP_MainMenu", class);
        assert_eq!(validator().validate(&asset, &mut ctx), ValidationOutcome::Valid);
    }

    #[test]
    fn test_deprecated_marker() {
        let class = TypeDescriptor::new("Blueprint", ["Object"]);
        let asset = AssetData::new("DEPRECATED_BP_Weapon", "/Game/Old/DEPRECATED_BP_Weapon", class);
        let mut ctx = ValidationContext::new();
        assert_eq!(validator().validate(&asset, &mut ctx), ValidationOutcome::Valid);
    }

    #[test]
    fn test_can_validate_gate() {
        let v = validator().with_include_paths(vec!["/Game/".to_string()]);

        assert!(v.can_validate(&texture("T_Rock")));
        assert!(!v.can_validate(&AssetData::unloaded("T_Rock", "/Game/T_Rock")));

        let engine = AssetData::new(
            "Cube",
            "/Engine/BasicShapes/Cube",
            TypeDescriptor::new("StaticMesh", ["Object"]),
        );
        assert!(!v.can_validate(&engine));
        assert!(validator().can_validate(&engine));
    }

    #[test]
    fn test_include_path_without_trailing_slash() {
        let v = validator().with_include_paths(vec!["/Game".to_string()]);

        assert!(v.can_validate(&texture("T_Rock")));
        let sibling = AssetData::new(
            "T_Rock",
            "/GameOther/T_Rock",
            TypeDescriptor::new("Texture2D", ["Texture", "Object"]),
        );
        assert!(!v.can_validate(&sibling));
    }

    #[test]
    fn test_unloaded_asset_not_validated() {
        let mut ctx = ValidationContext::new();
        let outcome = validator().validate(&AssetData::unloaded("x", "/Game/x"), &mut ctx);
        assert_eq!(outcome, ValidationOutcome::NotValidated);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_from_settings() {
        let settings = ValidationSettings::from_json_str(
            r#"{"asset_prefix_rules": {"Texture2D": {"prefix": "T_"}}, "include_paths": ["/Game/"]}"#,
        )
        .unwrap();
        let v = AssetNameValidator::from_settings(&settings).unwrap();
        assert_eq!(v.rule_table().len(), 1);
        assert!(v.can_validate(&texture("T_Rock")));
    }
}
