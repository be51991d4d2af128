//! Category overview manifest entries.

use std::path::Path;

use serde_json::Value;

use taxa_core::{DataError, IdLabel};

/// One `{ id, path }` entry of the category overview.
///
/// `id` is only a label for reports; `path` locates the category file
/// relative to the data root.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewEntry {
    /// The entry's `id`, if present.
    pub id: Option<Value>,
    /// Root-relative path of the category file.
    pub path: String,
}

impl OverviewEntry {
    /// Interpret the `index`-th element of the overview at `manifest`.
    ///
    /// # Errors
    ///
    /// An entry without a string `path` cannot be followed, which makes
    /// the manifest unusable: returns [`DataError::OverviewEntry`].
    pub fn from_value(manifest: &Path, index: usize, value: &Value) -> Result<Self, DataError> {
        let path = value
            .get("path")
            .and_then(Value::as_str)
            .ok_or_else(|| DataError::OverviewEntry {
                path: manifest.to_path_buf(),
                index,
                reason: "has no string `path`".to_string(),
            })?;

        Ok(Self {
            id: value.get("id").cloned(),
            path: path.to_string(),
        })
    }

    /// Parse every entry, failing on the first unusable one.
    pub fn parse_all(manifest: &Path, values: &[Value]) -> Result<Vec<Self>, DataError> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| Self::from_value(manifest, index, value))
            .collect()
    }

    /// Report label for this category.
    pub fn label(&self) -> String {
        IdLabel(self.id.as_ref()).to_string()
    }
}
