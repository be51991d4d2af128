//! # Check Command
//!
//! Loads the layout, runs the integrity check, and renders the outcome.
//! Output streams are injected so the rendering can be tested without
//! spawning the binary.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use taxa_core::{DataLayout, LayoutConfig};

/// Printed to stdout when everything checks out.
pub const SUCCESS_MESSAGE: &str = "✅ All data files are valid.";

/// Prefix for fatal errors on stderr.
pub const FATAL_PREFIX: &str = "Validation failed:";

/// Build the data layout for `root`.
///
/// An explicit `config` file wins; otherwise `taxa.yaml` in the root is
/// used when present.
pub fn load_layout(root: &Path, config: Option<&Path>) -> Result<DataLayout> {
    let layout_config = match config {
        Some(path) => LayoutConfig::from_yaml_file(path)?,
        None => LayoutConfig::discover(root)?,
    };
    Ok(DataLayout::new(root, layout_config))
}

/// Run the check and write the report.
///
/// Returns the process exit code for a completed run: `0` when the data
/// is clean, `1` when any record failed. Fatal load errors are returned
/// as `Err` and nothing is written.
pub fn run_check(layout: &DataLayout, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    tracing::info!(root = %layout.root().display(), "checking data");

    let report = taxa_integrity::check(layout)
        .with_context(|| format!("checking data under {}", layout.root().display()))?;

    if report.is_ok() {
        writeln!(out, "{SUCCESS_MESSAGE}")?;
        Ok(0)
    } else {
        for entry in report.entries() {
            writeln!(err, "{entry}")?;
        }
        tracing::info!(failures = report.entries().len(), "data check failed");
        Ok(1)
    }
}
