//! # taxa-cli — Command-Line Interface
//!
//! Provides the `taxa` binary: a single implicit "check" action meant to
//! run in CI.
//!
//! ```bash
//! taxa                      # check the data root found from the CWD
//! taxa --root ./site -v     # explicit root, info-level logs
//! taxa --config ci.yaml     # alternative file layout
//! ```
//!
//! ## Exit Codes
//!
//! - `0` — every record is valid and every reference resolves; a
//!   confirmation line is printed to stdout.
//! - `1` — validation or reference failures (one block per offending
//!   record on stderr), or a fatal load error printed with the
//!   [`FATAL_PREFIX`].

pub mod run;

use std::path::{Path, PathBuf};

pub use run::{load_layout, run_check, FATAL_PREFIX, SUCCESS_MESSAGE};

/// Walk up from `start` to the first directory holding both `schemas/`
/// and `data/`.
pub fn find_data_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join("schemas").is_dir() && dir.join("data").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_root_from_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("schemas")).unwrap();
        std::fs::create_dir_all(dir.path().join("data/species")).unwrap();

        let found = find_data_root(&dir.path().join("data/species")).unwrap();
        assert_eq!(found, dir.path());
    }

    #[test]
    fn requires_both_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("schemas")).unwrap();

        if let Some(found) = find_data_root(dir.path()) {
            // An ancestor of the temp dir may happen to qualify.
            assert_ne!(found, dir.path());
        }
    }
}
