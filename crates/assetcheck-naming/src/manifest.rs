//! Asset manifest: a snapshot of assets and the type hierarchy they use.
//!
//! ```json
//! {
//!   "types": { "Object": null, "Actor": "Object", "Pawn": "Actor", "Blueprint": "Object" },
//!   "assets": [
//!     { "name": "BP_Enemy", "path": "/Game/AI/BP_Enemy", "type": "Blueprint", "declared_type": "Pawn" }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entries::Entries;
use crate::hierarchy::TypeDescriptor;
use crate::validator::AssetData;

/// Errors that can occur while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Failed to read the manifest file.
    #[error("failed to read manifest {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON for this schema.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A type is referenced but not declared in `types`.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// Following parents from a type leads back to itself.
    #[error("type hierarchy cycle through '{0}'")]
    Cycle(String),

    /// A type is declared more than once in `types`.
    #[error("type '{0}' is declared more than once")]
    DuplicateType(String),
}

/// One asset entry in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestAsset {
    pub name: String,
    pub path: String,
    /// Runtime type; absent for assets that are not loaded.
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Authored type for generic container assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,
}

/// Assets plus a type → parent map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Parent of each type; `null` for roots.
    pub types: BTreeMap<String, Option<String>>,
    /// Assets to validate.
    pub assets: Vec<ManifestAsset>,
}

/// On-disk shape of [`Manifest`], keeping repeated type keys.
#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    types: Entries<Option<String>>,
    #[serde(default)]
    assets: Vec<ManifestAsset>,
}

impl Manifest {
    /// Parses a manifest from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        let types = raw
            .types
            .into_unique_map()
            .map_err(ManifestError::DuplicateType)?;
        Ok(Self {
            types,
            assets: raw.assets,
        })
    }

    /// Reads a manifest from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let json = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Builds the descriptor for `type_name` with its ancestors, closest first.
    pub fn descriptor(&self, type_name: &str) -> Result<TypeDescriptor, ManifestError> {
        let mut parent = self
            .types
            .get(type_name)
            .ok_or_else(|| ManifestError::UnknownType(type_name.to_string()))?;

        let mut seen = HashSet::from([type_name]);
        let mut ancestors = Vec::new();
        while let Some(p) = parent {
            if !seen.insert(p.as_str()) {
                return Err(ManifestError::Cycle(p.clone()));
            }
            ancestors.push(p.clone());
            parent = self
                .types
                .get(p)
                .ok_or_else(|| ManifestError::UnknownType(p.clone()))?;
        }

        Ok(TypeDescriptor::new(type_name, ancestors))
    }

    /// Resolves every entry into [`AssetData`].
    pub fn assets(&self) -> Result<Vec<AssetData>, ManifestError> {
        self.assets
            .iter()
            .map(|entry| {
                let Some(ref type_name) = entry.type_name else {
                    return Ok(AssetData::unloaded(&entry.name, &entry.path));
                };
                let mut class = self.descriptor(type_name)?;
                if let Some(ref declared) = entry.declared_type {
                    class = class.with_declared_type(self.descriptor(declared)?);
                }
                Ok(AssetData::new(&entry.name, &entry.path, class))
            })
            .collect()
    }
}
