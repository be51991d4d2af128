//! # taxa-core — Foundational Types for taxa
//!
//! Shared primitives for the species/category integrity checker. Every
//! other crate in the workspace depends on `taxa-core`; it depends on
//! nothing internal.
//!
//! ## Contents
//!
//! - [`layout`] — where the schemas and data files live, with YAML
//!   overrides via `taxa.yaml`.
//! - [`document`] — reading a JSON file into an untyped `serde_json::Value`.
//! - [`id`] — species id keys and the id set used for referential checks.
//! - [`error`] — `thiserror` error types for configuration and data loading.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `taxa-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Documents stay untyped `Value`s until a schema has accepted them.

pub mod document;
pub mod error;
pub mod id;
pub mod layout;

pub use document::{read_json, read_json_array};
pub use error::{ConfigError, DataError};
pub use id::{IdLabel, SpeciesIdSet, SpeciesKey};
pub use layout::{DataLayout, LayoutConfig, CONFIG_FILE_NAME};
