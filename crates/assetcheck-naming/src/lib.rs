//! Asset naming-convention validation.
//!
//! Checks asset names against a structural convention (uppercase-led,
//! underscore-separated segments) and against per-type prefix/postfix rules
//! resolved through the asset's type hierarchy.
//!
//! # Example
//!
//! ```
//! use assetcheck_naming::{
//!     AssetData, Rule, TypeDescriptor, ValidationOutcome, ValidationSettings,
//!     ValidatorRegistry,
//! };
//!
//! let mut settings = ValidationSettings::default();
//! settings
//!     .asset_prefix_rules
//!     .insert("Texture2D".to_string(), Rule::prefix("T_"));
//!
//! let registry = ValidatorRegistry::with_settings(&settings).unwrap();
//! let asset = AssetData::new(
//!     "T_Rock_D",
//!     "/Game/Env/T_Rock_D",
//!     TypeDescriptor::new("Texture2D", ["Texture", "Object"]),
//! );
//!
//! let report = registry.validate_asset(&asset);
//! assert_eq!(report.outcome, ValidationOutcome::Valid);
//! ```

pub mod checker;
mod entries;
pub mod hierarchy;
pub mod manifest;
pub mod pattern;
pub mod registry;
pub mod report;
pub mod rules;
pub mod settings;
pub mod validator;

pub use checker::NameRuleChecker;
pub use hierarchy::{HierarchyResolver, Resolution, TypeDescriptor};
pub use manifest::{Manifest, ManifestAsset, ManifestError};
pub use pattern::matches_naming_pattern;
pub use registry::{ValidatorMetadata, ValidatorRegistry};
pub use report::{
    AssetReport, BatchReport, BatchSummary, Diagnostic, Severity, ValidationContext,
    ValidationOutcome,
};
pub use rules::{Rule, RuleTable};
pub use settings::{ConfigError, ValidationSettings};
pub use validator::{AssetData, AssetNameValidator, AssetValidator};
