//! # Schema Validation
//!
//! Compiles JSON Schema documents into reusable validators and runs
//! documents through them.
//!
//! Validation is exhaustive: [`CompiledSchema::check`] walks the whole
//! document and reports every violation it finds, so a single bad record
//! surfaces all of its problems in one run.
//!
//! ## Schema Resolution
//!
//! The schema directory is addressed by two base URIs: the engine's
//! default base (`json-schema:///`, used when a schema has no `$id`) and
//! the directory part of the compiled schema's own `$id`. A cross-file
//! `$ref` such as `"defs/rank.json#/$defs/rank"` resolves against one of
//! those bases; whatever follows the base is taken as a path inside the
//! schema directory, subdirectories included. Internal `#/...` refs are
//! resolved by the `jsonschema` crate natively. A ref outside both bases,
//! or one that would leave the schema directory, fails compilation instead
//! of falling through to the network.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;
use thiserror::Error;

use taxa_core::DataError;

/// A schema could not be turned into a validator.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read or is not JSON.
    #[error("cannot load schema: {0}")]
    Load(#[from] DataError),

    /// The schema is not a valid JSON Schema (meta-schema violation,
    /// bad keyword value, or unresolvable `$ref`).
    #[error("cannot compile schema '{schema}': {reason}")]
    Compile {
        /// Schema file name or label.
        schema: String,
        /// Engine-provided reason.
        reason: String,
    },
}

/// A single rule violation inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating location; empty for the document root.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// Whether the violation applies to the whole document.
    pub fn is_root(&self) -> bool {
        self.instance_path.is_empty()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "(root) {}", self.message)
        } else {
            write!(f, "{} {}", self.instance_path, self.message)
        }
    }
}

/// Outcome of checking one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Every violation, in the order the engine reported them.
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// True when the document conforms.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Base URI the engine assigns to schemas without an `$id`.
const DEFAULT_BASE_URI: &str = "json-schema:///";

/// Resolves external `$ref`s from files in the schema directory.
struct LocalSchemaRetriever {
    schema_dir: PathBuf,
    /// URI prefixes that denote the schema directory itself.
    base_uris: Vec<String>,
}

impl LocalSchemaRetriever {
    fn new(schema_dir: PathBuf, schema: &Value) -> Self {
        let mut base_uris = vec![DEFAULT_BASE_URI.to_string()];
        if let Some((dir, _)) = schema
            .get("$id")
            .and_then(Value::as_str)
            .and_then(|id| id.rsplit_once('/'))
        {
            base_uris.push(format!("{dir}/"));
        }
        Self {
            schema_dir,
            base_uris,
        }
    }

    /// Map a resolved `$ref` URI to a file under the schema directory.
    fn local_path(&self, uri: &str) -> Option<PathBuf> {
        let document = uri.split('#').next()?;
        let relative = self
            .base_uris
            .iter()
            .find_map(|base| document.strip_prefix(base.as_str()))?;

        let mut path = self.schema_dir.clone();
        for segment in relative.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return None;
            }
            path.push(segment);
        }
        Some(path)
    }
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let path = self.local_path(uri_str).ok_or_else(|| {
            format!(
                "cannot resolve $ref '{uri_str}' to a schema inside {}",
                self.schema_dir.display()
            )
        })?;

        tracing::debug!(uri = uri_str, path = %path.display(), "resolving schema $ref");
        taxa_core::read_json(&path).map_err(|e| e.into())
    }
}

/// Builds [`CompiledSchema`]s that share one schema directory for `$ref`
/// resolution.
#[derive(Debug, Clone)]
pub struct SchemaCompiler {
    schema_dir: PathBuf,
}

impl SchemaCompiler {
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
        }
    }

    /// The directory external `$ref`s are loaded from.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Compile an in-memory schema document.
    ///
    /// `name` only labels errors and log lines.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the document violates its
    /// meta-schema or references a schema that cannot be found locally.
    pub fn compile(&self, name: &str, schema: &Value) -> Result<CompiledSchema, SchemaError> {
        let retriever = LocalSchemaRetriever::new(self.schema_dir.clone(), schema);

        let validator = jsonschema::options()
            .should_validate_formats(true)
            .should_ignore_unknown_formats(true)
            .with_retriever(retriever)
            .build(schema)
            .map_err(|e| SchemaError::Compile {
                schema: name.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(schema = name, "compiled schema");
        Ok(CompiledSchema {
            name: name.to_string(),
            validator,
        })
    }

    /// Read a schema file and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if the file cannot be read or parsed,
    /// and [`SchemaError::Compile`] as for [`SchemaCompiler::compile`].
    pub fn compile_file(&self, path: &Path) -> Result<CompiledSchema, SchemaError> {
        let schema = taxa_core::read_json(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());
        self.compile(&name, &schema)
    }
}

/// A compiled, reusable schema validator.
///
/// Compiling once and checking many documents avoids re-parsing the
/// schema per record.
pub struct CompiledSchema {
    name: String,
    validator: Validator,
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CompiledSchema {
    /// The schema's label (normally its file name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate `document`, collecting every violation.
    pub fn check(&self, document: &Value) -> Verdict {
        let violations = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();
        Verdict { violations }
    }
}
