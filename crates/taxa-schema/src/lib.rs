//! # taxa-schema — Schema Loading & Validation
//!
//! Wraps the `jsonschema` crate behind two small types:
//!
//! - [`SchemaSet::load`] reads the species and category schemas named by a
//!   [`taxa_core::DataLayout`] and compiles each exactly once.
//! - [`CompiledSchema::check`] validates a document and returns a
//!   [`Verdict`] carrying *every* violation, each with the JSON Pointer of
//!   the offending location and the engine's message.
//!
//! ## Compilation Settings
//!
//! - `format` keywords are asserted (date, uri, email, ...), not treated as
//!   annotations.
//! - Unknown keywords and unknown formats are ignored rather than rejected.
//! - `$ref`s to other files are resolved from the schema directory on disk;
//!   nothing is fetched over the network.
//!
//! A schema that cannot be read, parsed, or compiled is a [`SchemaError`]
//! and ends the run. Invalid *documents* are never errors here; they are
//! verdicts.

pub mod loader;
pub mod validate;

pub use loader::SchemaSet;
pub use validate::{CompiledSchema, SchemaCompiler, SchemaError, Verdict, Violation};
