//! # Integrity Checker
//!
//! The only place with cross-record logic. Records are examined strictly
//! in order; each file is fully loaded before its records are looked at.
//!
//! ## Failure Policy
//!
//! - A record that violates its schema, or a category that names unknown
//!   species, is recorded in the [`RunReport`] and the run continues.
//! - A file that cannot be read, is not JSON, or has the wrong top-level
//!   shape ends the run with a [`CheckError`]. Nothing gathered so far is
//!   returned in that case.
//!
//! The missing-id check for a category runs whether or not the category
//! passed schema validation. A category whose `speciesIds` is absent or
//! not an array cannot be checked and is recorded as a failure of its
//! own. The species id set includes ids from species records that failed
//! validation.

use serde_json::Value;
use thiserror::Error;

use taxa_core::{DataError, DataLayout, SpeciesIdSet};
use taxa_schema::{SchemaError, SchemaSet};

use crate::overview::OverviewEntry;
use crate::report::{ReportEntry, RunReport};

/// A run-aborting failure.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A schema could not be loaded or compiled.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A data file could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Load the schemas named by `layout` and check its data.
///
/// # Errors
///
/// Returns [`CheckError`] on any schema or file-level failure.
pub fn check(layout: &DataLayout) -> Result<RunReport, CheckError> {
    let schemas = SchemaSet::load(layout)?;
    let report = IntegrityChecker::new(layout, &schemas).run()?;
    Ok(report)
}

/// Checks one dataset against a compiled [`SchemaSet`].
#[derive(Debug, Clone, Copy)]
pub struct IntegrityChecker<'a> {
    layout: &'a DataLayout,
    schemas: &'a SchemaSet,
}

impl<'a> IntegrityChecker<'a> {
    pub fn new(layout: &'a DataLayout, schemas: &'a SchemaSet) -> Self {
        Self { layout, schemas }
    }

    /// Run the full check.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the species collection, the category
    /// overview, or any category file cannot be loaded.
    pub fn run(&self) -> Result<RunReport, DataError> {
        let mut report = RunReport::new();

        let species_path = self.layout.species_index();
        let species = taxa_core::read_json_array(&species_path)?;
        self.check_species(&species, &mut report);

        let ids = SpeciesIdSet::from_records(&species);
        tracing::debug!(records = species.len(), distinct_ids = ids.len(), "built species id set");

        let overview_path = self.layout.category_overview();
        let overview = taxa_core::read_json_array(&overview_path)?;
        let entries = OverviewEntry::parse_all(&overview_path, &overview)?;

        for entry in &entries {
            let category = taxa_core::read_json(&self.layout.category_file(&entry.path))?;
            self.check_category(entry, &category, &ids, &mut report);
        }

        tracing::info!(
            species = report.species_checked(),
            categories = report.categories_checked(),
            failures = report.entries().len(),
            "integrity check finished"
        );

        Ok(report)
    }

    /// Validate every species record, in collection order.
    pub fn check_species(&self, records: &[Value], report: &mut RunReport) {
        for (index, record) in records.iter().enumerate() {
            report.count_species();
            let verdict = self.schemas.species.check(record);
            if !verdict.is_valid() {
                tracing::debug!(index, violations = verdict.violations.len(), "species record invalid");
                report.record(ReportEntry::SpeciesInvalid {
                    index,
                    id: record.get("id").cloned(),
                    violations: verdict.into_violations(),
                });
            }
        }
    }

    /// Validate one category record and resolve its `speciesIds`.
    pub fn check_category(
        &self,
        entry: &OverviewEntry,
        category: &Value,
        ids: &SpeciesIdSet,
        report: &mut RunReport,
    ) {
        report.count_category();
        let label = entry.label();

        let verdict = self.schemas.category.check(category);
        if !verdict.is_valid() {
            tracing::debug!(category = %label, violations = verdict.violations.len(), "category record invalid");
            report.record(ReportEntry::CategoryInvalid {
                category: label.clone(),
                violations: verdict.into_violations(),
            });
        }

        let Some(Value::Array(references)) = category.get("speciesIds") else {
            tracing::debug!(category = %label, path = %entry.path, "category has no speciesIds array");
            report.record(ReportEntry::SpeciesIdsNotArray { category: label });
            return;
        };

        let missing = ids.missing(references);
        if !missing.is_empty() {
            report.record(ReportEntry::MissingSpecies {
                category: label,
                missing: missing.into_iter().cloned().collect(),
            });
        }
    }
}
