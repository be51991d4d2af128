//! # Schema Loader
//!
//! Reads the species and category schemas from the data layout and
//! compiles both up front. Any failure here is a configuration problem,
//! not a data problem, so it aborts the run before a single record is
//! looked at.

use taxa_core::DataLayout;

use crate::validate::{CompiledSchema, SchemaCompiler, SchemaError};

/// The two compiled schemas the integrity checker needs.
#[derive(Debug)]
pub struct SchemaSet {
    /// Validator for species records.
    pub species: CompiledSchema,
    /// Validator for category records.
    pub category: CompiledSchema,
}

impl SchemaSet {
    /// Load and compile both schemas named by `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if either schema file is missing, is not
    /// JSON, or is not a valid JSON Schema.
    pub fn load(layout: &DataLayout) -> Result<Self, SchemaError> {
        let compiler = SchemaCompiler::new(layout.schema_dir());
        let species = compiler.compile_file(&layout.species_schema())?;
        let category = compiler.compile_file(&layout.category_schema())?;

        tracing::info!(
            species = species.name(),
            category = category.name(),
            schema_dir = %compiler.schema_dir().display(),
            "compiled schemas"
        );

        Ok(Self { species, category })
    }
}
