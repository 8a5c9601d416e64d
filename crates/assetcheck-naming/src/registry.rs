//! Validator registry for running validators over assets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::report::{AssetReport, BatchReport, ValidationContext, ValidationOutcome};
use crate::settings::{ConfigError, ValidationSettings};
use crate::validator::{AssetData, AssetNameValidator, AssetValidator};

/// Registry of validators run by the host pipeline.
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn AssetValidator>>,
    disabled: HashSet<String>,
    enabled_only: Option<HashSet<String>>,
}

impl ValidatorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
            disabled: HashSet::new(),
            enabled_only: None,
        }
    }

    /// Creates a registry with the built-in validators configured from `settings`.
    pub fn with_settings(settings: &ValidationSettings) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.register(Box::new(AssetNameValidator::from_settings(settings)?));
        Ok(registry)
    }

    /// Registers a new validator.
    pub fn register(&mut self, validator: Box<dyn AssetValidator>) {
        self.validators.push(validator);
    }

    /// Disables a validator by ID.
    pub fn disable(&mut self, id: &str) {
        self.disabled.insert(id.to_string());
    }

    /// Enables only the specified validators (disables all others).
    pub fn enable_only(&mut self, ids: &[&str]) {
        self.enabled_only = Some(ids.iter().map(|s| s.to_string()).collect());
    }

    /// Returns the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validators are registered.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Returns validator metadata for documentation/introspection.
    pub fn validator_metadata(&self) -> Vec<ValidatorMetadata> {
        self.validators
            .iter()
            .map(|v| ValidatorMetadata {
                id: v.id().to_string(),
                description: v.description().to_string(),
                enabled: self.is_enabled(v.id()),
            })
            .collect()
    }

    fn is_enabled(&self, id: &str) -> bool {
        if self.disabled.contains(id) {
            return false;
        }
        if let Some(ref enabled) = self.enabled_only {
            return enabled.contains(id);
        }
        true
    }

    /// Runs every enabled, applicable validator on `asset`.
    pub fn validate_asset(&self, asset: &AssetData) -> AssetReport {
        let mut outcome = ValidationOutcome::NotValidated;
        let mut diagnostics = Vec::new();

        for validator in &self.validators {
            if !self.is_enabled(validator.id()) || !validator.can_validate(asset) {
                continue;
            }

            let mut ctx = ValidationContext::new();
            let result = validator.validate(asset, &mut ctx);
            debug!(validator = validator.id(), asset = %asset.name, %result, "validated");

            outcome = outcome.combine(result);
            diagnostics.extend(ctx.into_diagnostics());
        }

        AssetReport {
            name: asset.name.clone(),
            path: asset.package_path.clone(),
            outcome,
            diagnostics,
        }
    }

    /// Validates every asset; one asset's failure never stops the batch.
    pub fn validate_all(&self, assets: &[AssetData]) -> BatchReport {
        let mut report = BatchReport::new();
        for asset in assets {
            report.add(self.validate_asset(asset));
        }
        report
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a validator for documentation/introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorMetadata {
    /// Validator identifier.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the validator runs with the current registry filters.
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::TypeDescriptor;
    use crate::report::codes;
    use crate::rules::Rule;

    /// Fails every asset whose name is longer than `max` characters.
    struct MaxLength {
        max: usize,
    }

    impl AssetValidator for MaxLength {
        fn id(&self) -> &'static str {
            "naming/max-length"
        }

        fn description(&self) -> &'static str {
            "Names are short"
        }

        fn can_validate(&self, asset: &AssetData) -> bool {
            asset.class.is_some()
        }

        fn validate(&self, asset: &AssetData, ctx: &mut ValidationContext) -> ValidationOutcome {
            if asset.name.len() > self.max {
                ctx.add_error("naming/max-length", "name too long");
                ValidationOutcome::Invalid
            } else {
                ValidationOutcome::Valid
            }
        }
    }

    fn settings() -> ValidationSettings {
        let mut settings = ValidationSettings::default();
        settings
            .asset_prefix_rules
            .insert("StaticMesh".to_string(), Rule::prefix("SM_"));
        settings.include_paths = vec!["/Game/".to_string()];
        settings
    }

    fn mesh(name: &str, path: &str) -> AssetData {
        AssetData::new(name, path, TypeDescriptor::new("StaticMesh", ["Object"]))
    }

    #[test]
    fn test_empty_registry() {
        let registry = ValidatorRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        let report = registry.validate_asset(&mesh("SM_Rock", "/Game/SM_Rock"));
        assert_eq!(report.outcome, ValidationOutcome::NotValidated);
    }

    #[test]
    fn test_with_settings() {
        let registry = ValidatorRegistry::with_settings(&settings()).unwrap();
        assert_eq!(registry.len(), 1);
        let meta = registry.validator_metadata();
        assert_eq!(meta[0].id, AssetNameValidator::ID);
        assert!(meta[0].enabled);
    }

    #[test]
    fn test_not_applicable_has_no_diagnostics() {
        let registry = ValidatorRegistry::with_settings(&settings()).unwrap();

        let report = registry.validate_asset(&mesh("cube", "/Engine/BasicShapes/cube"));
        assert_eq!(report.outcome, ValidationOutcome::NotValidated);
        assert!(report.diagnostics.is_empty());

        let report = registry.validate_asset(&AssetData::unloaded("rock", "/Game/rock"));
        assert_eq!(report.outcome, ValidationOutcome::NotValidated);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_outcomes_combine_across_validators() {
        let mut registry = ValidatorRegistry::with_settings(&settings()).unwrap();
        registry.register(Box::new(MaxLength { max: 8 }));

        let report = registry.validate_asset(&mesh("SM_Boulder_Large", "/Game/SM_Boulder_Large"));
        assert_eq!(report.outcome, ValidationOutcome::Invalid);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].code, "naming/max-length");

        let report = registry.validate_asset(&mesh("SM_Rock", "/Game/SM_Rock"));
        assert_eq!(report.outcome, ValidationOutcome::Valid);
    }

    #[test]
    fn test_disable_and_enable_only() {
        let mut registry = ValidatorRegistry::with_settings(&settings()).unwrap();
        registry.register(Box::new(MaxLength { max: 4 }));

        registry.disable("naming/max-length");
        let report = registry.validate_asset(&mesh("SM_Rock", "/Game/SM_Rock"));
        assert_eq!(report.outcome, ValidationOutcome::Valid);

        let mut registry = ValidatorRegistry::with_settings(&settings()).unwrap();
        registry.register(Box::new(MaxLength { max: 4 }));
        registry.enable_only(&["naming/max-length"]);
        let report = registry.validate_asset(&mesh("rock", "/Game/rock"));
        assert_eq!(report.outcome, ValidationOutcome::Valid);
        assert!(report.diagnostics.is_empty());

        let meta = registry.validator_metadata();
        assert!(!meta[0].enabled);
        assert!(meta[1].enabled);
    }

    #[test]
    fn test_validate_all_keeps_going() {
        let registry = ValidatorRegistry::with_settings(&settings()).unwrap();
        let assets = vec![
            mesh("rock", "/Game/rock"),
            mesh("SM_Rock", "/Game/SM_Rock"),
            mesh("Cube", "/Engine/Cube"),
        ];

        let report = registry.validate_all(&assets);
        assert!(!report.ok);
        assert_eq!(report.assets.len(), 3);
        assert_eq!(report.summary.invalid, 1);
        assert_eq!(report.summary.valid, 1);
        assert_eq!(report.summary.not_validated, 1);

        let codes_seen: Vec<&str> = report.assets[0]
            .diagnostics
            .iter()
            .map(|d| d.code.as_str())
            .collect();
        assert_eq!(codes_seen, vec![codes::STRUCTURE, codes::PREFIX]);
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = ValidatorRegistry::with_settings(&settings()).unwrap();
        let assets: Vec<AssetData> = (0..8)
            .map(|i| mesh(&format!("SM_Rock{i}"), &format!("/Game/SM_Rock{i}")))
            .collect();

        let registry = &registry;
        let outcomes: Vec<ValidationOutcome> = std::thread::scope(|s| {
            let handles: Vec<_> = assets
                .iter()
                .map(|asset| s.spawn(move || registry.validate_asset(asset).outcome))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(outcomes.iter().all(|o| *o == ValidationOutcome::Valid));
    }
}
