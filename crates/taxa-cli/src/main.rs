//! # taxa CLI entry point
//!
//! Parses arguments, initialises logging, and runs the data check.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taxa_cli::{find_data_root, load_layout, run_check, FATAL_PREFIX};

/// Check species and category data against their schemas and verify that
/// every category's species references resolve.
#[derive(Parser, Debug)]
#[command(name = "taxa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data root holding `schemas/` and `data/`. Defaults to the nearest
    /// such directory at or above the current directory.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Layout file overriding schema and data locations.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = cli.root.clone().unwrap_or_else(default_root);
    tracing::debug!(root = %root.display(), "resolved data root");

    let result = load_layout(&root, cli.config.as_deref()).and_then(|layout| {
        run_check(&layout, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{FATAL_PREFIX} {e:#}");
            ExitCode::from(1)
        }
    }
}

fn default_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_data_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("no directory with schemas/ and data/ found; using current directory");
        cwd
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["taxa"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.root.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli1 = Cli::try_parse_from(["taxa", "-v"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli3 = Cli::try_parse_from(["taxa", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_root_and_config() {
        let cli =
            Cli::try_parse_from(["taxa", "--root", "site", "--config", "ci.yaml"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, Some(PathBuf::from("ci.yaml")));
    }

    #[test]
    fn cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["taxa", "data/species/index.json"]).is_err());
    }
}
