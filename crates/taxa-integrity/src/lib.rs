//! # taxa-integrity — Species/Category Integrity Checking
//!
//! Drives a full check of a dataset:
//!
//! 1. every species record is validated against the species schema;
//! 2. every category named in the overview manifest is loaded and
//!    validated against the category schema;
//! 3. every id in a category's `speciesIds` must name a species.
//!
//! Problems with individual records are collected into a [`RunReport`]
//! and never stop the run. Problems with whole files (unreadable, not
//! JSON, wrong top-level shape) are returned as [`CheckError`] and stop it
//! immediately.
//!
//! ```no_run
//! use taxa_core::DataLayout;
//!
//! let layout = DataLayout::with_defaults(".");
//! let report = taxa_integrity::check(&layout)?;
//! if !report.is_ok() {
//!     eprintln!("{report}");
//! }
//! # Ok::<(), taxa_integrity::CheckError>(())
//! ```

pub mod checker;
pub mod overview;
pub mod report;

pub use checker::{check, CheckError, IntegrityChecker};
pub use overview::OverviewEntry;
pub use report::{ReportEntry, RunReport};
