//! # Error Types
//!
//! Errors raised while loading configuration and data documents. All
//! errors use `thiserror` for derive-based `Display` and `Error`.
//!
//! Every variant here is fatal to a run: a file that cannot be read or
//! parsed makes the whole dataset unusable. Per-record problems are not
//! errors at all; they are report entries collected by `taxa-integrity`.

use std::path::PathBuf;

use thiserror::Error;

/// A data document could not be loaded.
#[derive(Error, Debug)]
pub enum DataError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its top-level shape is wrong.
    #[error("{path}: expected {expected}")]
    Shape {
        /// Path of the file.
        path: PathBuf,
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// A category overview entry cannot be followed to its category file.
    #[error("{path}: overview entry {index} {reason}")]
    OverviewEntry {
        /// Path of the overview file.
        path: PathBuf,
        /// Zero-based position of the entry.
        index: usize,
        /// What is wrong with the entry.
        reason: String,
    },
}

/// The layout configuration file could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML or has unknown keys.
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = DataError::Read {
            path: PathBuf::from("data/species/index.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/species/index.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn shape_error_display() {
        let err = DataError::Shape {
            path: PathBuf::from("data/categories.json"),
            expected: "a JSON array",
        };
        assert_eq!(err.to_string(), "data/categories.json: expected a JSON array");
    }

    #[test]
    fn overview_entry_error_display() {
        let err = DataError::OverviewEntry {
            path: PathBuf::from("data/categories.json"),
            index: 3,
            reason: "has no string `path`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data/categories.json: overview entry 3 has no string `path`"
        );
    }
}
