//! # Run Report
//!
//! Accumulates the outcome of one check. A run is OK until the first
//! entry is recorded and never becomes OK again. Entries keep the order
//! in which records were examined: species in collection order, then
//! categories in overview order.
//!
//! Rendering (one block per entry):
//!
//! ```text
//! Species[0] invalid (id=fox):
//! - (root) Additional properties are not allowed ('extra' was unexpected)
//! Category c1 invalid:
//! - /title 3 is not of type "string"
//! Category c1 references missing ids: bear, elk
//! Category c2 has no speciesIds array
//! ```

use std::fmt;

use serde_json::Value;

use taxa_core::IdLabel;
use taxa_schema::Violation;

/// A recoverable problem with one record.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    /// A species record failed schema validation.
    SpeciesInvalid {
        /// Position in the species collection.
        index: usize,
        /// The record's `id`, if it had one.
        id: Option<Value>,
        /// Every violation found.
        violations: Vec<Violation>,
    },

    /// A category record failed schema validation.
    CategoryInvalid {
        /// Label from the overview entry.
        category: String,
        /// Every violation found.
        violations: Vec<Violation>,
    },

    /// A category's `speciesIds` is absent or not an array, so its
    /// references cannot be checked.
    SpeciesIdsNotArray {
        /// Label from the overview entry.
        category: String,
    },

    /// A category references species ids that do not exist.
    MissingSpecies {
        /// Label from the overview entry.
        category: String,
        /// Unresolved ids in `speciesIds` order, repeats included.
        missing: Vec<Value>,
    },
}

fn write_violations(f: &mut fmt::Formatter<'_>, violations: &[Violation]) -> fmt::Result {
    for (i, v) in violations.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "- {v}")?;
    }
    Ok(())
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeciesInvalid {
                index,
                id,
                violations,
            } => {
                writeln!(f, "Species[{index}] invalid (id={}):", IdLabel(id.as_ref()))?;
                write_violations(f, violations)
            }
            Self::CategoryInvalid {
                category,
                violations,
            } => {
                writeln!(f, "Category {category} invalid:")?;
                write_violations(f, violations)
            }
            Self::SpeciesIdsNotArray { category } => {
                write!(f, "Category {category} has no speciesIds array")
            }
            Self::MissingSpecies { category, missing } => {
                let ids: Vec<String> = missing
                    .iter()
                    .map(|id| IdLabel(Some(id)).to_string())
                    .collect();
                write!(f, "Category {category} references missing ids: {}", ids.join(", "))
            }
        }
    }
}

/// Accumulated result of a check run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    entries: Vec<ReportEntry>,
    species_checked: usize,
    categories_checked: usize,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure. The run is no longer OK.
    pub fn record(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn count_species(&mut self) {
        self.species_checked += 1;
    }

    pub(crate) fn count_category(&mut self) {
        self.categories_checked += 1;
    }

    /// True when nothing was recorded.
    pub fn is_ok(&self) -> bool {
        self.entries.is_empty()
    }

    /// Failures in the order they were found.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of species records examined.
    pub fn species_checked(&self) -> usize {
        self.species_checked
    }

    /// Number of category records examined.
    pub fn categories_checked(&self) -> usize {
        self.categories_checked
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
