//! # Data Layout
//!
//! Where the schemas and data files live relative to the data root.
//!
//! The defaults match the repository layout the checker was written for:
//!
//! ```text
//! <root>/schemas/species.schema.json
//! <root>/schemas/category.schema.json
//! <root>/data/species/index.json
//! <root>/data/categories.json
//! ```
//!
//! Any of these can be overridden in a `taxa.yaml` at the root (or a file
//! passed explicitly), e.g.
//!
//! ```yaml
//! species_index: data/animals.json
//! ```
//!
//! Category files named by overview entries are resolved against the root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the optional layout file looked up in the data root.
pub const CONFIG_FILE_NAME: &str = "taxa.yaml";

/// Root-relative locations of the input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// JSON Schema for species records.
    pub species_schema: PathBuf,
    /// JSON Schema for category records.
    pub category_schema: PathBuf,
    /// The species collection.
    pub species_index: PathBuf,
    /// The category overview manifest.
    pub category_overview: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            species_schema: PathBuf::from("schemas/species.schema.json"),
            category_schema: PathBuf::from("schemas/category.schema.json"),
            species_index: PathBuf::from("data/species/index.json"),
            category_overview: PathBuf::from("data/categories.json"),
        }
    }
}

impl LayoutConfig {
    /// Load a layout from a YAML file. Keys left out keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded layout config");
        Ok(config)
    }

    /// Use `taxa.yaml` from `root` if it exists, otherwise the defaults.
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_yaml_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

/// A [`LayoutConfig`] anchored at a data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
    config: LayoutConfig,
}

impl DataLayout {
    /// Anchor `config` at `root`.
    pub fn new(root: impl Into<PathBuf>, config: LayoutConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Default layout under `root`.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, LayoutConfig::default())
    }

    /// The data root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root-relative configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn species_schema(&self) -> PathBuf {
        self.root.join(&self.config.species_schema)
    }

    pub fn category_schema(&self) -> PathBuf {
        self.root.join(&self.config.category_schema)
    }

    pub fn species_index(&self) -> PathBuf {
        self.root.join(&self.config.species_index)
    }

    pub fn category_overview(&self) -> PathBuf {
        self.root.join(&self.config.category_overview)
    }

    /// Directory used to resolve cross-schema `$ref`s: the directory
    /// holding the species schema.
    pub fn schema_dir(&self) -> PathBuf {
        self.species_schema()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone())
    }

    /// Resolve the `path` of a category overview entry.
    pub fn category_file(&self, entry_path: &str) -> PathBuf {
        self.root.join(entry_path)
    }
}
