//! # folio-license
//!
//! - `folio-license` - apply headers
//! - `folio-license --dry-run` - list files that would change
//! - `folio-license --check` - exit 1 if any file would change (CI)

use anyhow::{Context, Result};
use clap::Parser;
use folio_license::{HeaderConfig, Mode};
use std::path::PathBuf;
use std::process::ExitCode;

/// Stamp license headers onto source files
#[derive(Parser)]
#[command(name = "folio-license")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stamp and verify license headers on source files")]
struct Cli {
    /// Verify only; exit with code 1 if any file needs an update
    #[arg(long, conflicts_with = "dry_run")]
    check: bool,

    /// Show which files would be updated without writing them
    #[arg(long)]
    dry_run: bool,

    /// Repository root to scan
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Project name (default: "name" from package.json)
    #[arg(long)]
    project: Option<String>,

    /// Copyright year (default: current year)
    #[arg(long)]
    year: Option<i32>,

    /// File extension to stamp, repeatable
    #[arg(long = "ext", value_name = "EXT", default_value = "js")]
    extensions: Vec<String>,

    /// Extra directory name to skip, repeatable
    #[arg(long = "exclude", value_name = "DIR")]
    excludes: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Apply
        }
    }

    fn into_config(self) -> HeaderConfig {
        let mode = self.mode();
        let mut config = HeaderConfig::new(self.root)
            .mode(mode)
            .extensions(self.extensions);
        if let Some(project) = self.project {
            config = config.project(project);
        }
        if let Some(year) = self.year {
            config = config.year(year);
        }
        for dir in self.excludes {
            config = config.exclude(dir);
        }
        config
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.into_config();
    let report = folio_license::run(&config)
        .with_context(|| format!("license header run failed in {}", config.root.display()))?;

    if report.failed() {
        eprintln!("{}", report.summary());
        Ok(ExitCode::FAILURE)
    } else {
        println!("{}", report.summary());
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
