//! folio-license: stamp and verify license headers
//!
//! Walks a source tree and makes sure every matching file opens with the
//! project's license header.
//!
//! ## Modes
//! - [`Mode::Apply`] - rewrite out-of-date files
//! - [`Mode::DryRun`] - list what would change
//! - [`Mode::Check`] - list what would change; failure if anything would
//!
//! ## Behavior
//! - BOM and shebang lines are kept in front of the header
//! - An existing header of ours is replaced, so runs are idempotent
//! - Otherwise a leading generic comment block is replaced
//! - Exactly one blank line separates header and code

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod header;
pub mod scan;

pub use config::{HeaderConfig, Mode, DEFAULT_EXCLUDES};
pub use error::{LicenseError, Result};
pub use header::{stamp, LicenseHeader, HEADER_END, HEADER_START};

use chrono::Datelike;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize)]
struct PackageJson {
    name: Option<String>,
}

/// Project name from the config, falling back to `<root>/package.json`
pub fn resolve_project(config: &HeaderConfig) -> Result<String> {
    if let Some(project) = &config.project {
        return Ok(project.clone());
    }

    let path = config.root.join("package.json");
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(LicenseError::MissingProjectName(path));
        }
        Err(err) => return Err(LicenseError::io(path, err)),
    };

    let pkg: PackageJson = serde_json::from_str(&content).map_err(|source| LicenseError::PackageJson {
        path: path.clone(),
        source,
    })?;

    pkg.name
        .filter(|name| !name.is_empty())
        .ok_or(LicenseError::MissingProjectName(path))
}

/// Build the header for this run
pub fn build_header(config: &HeaderConfig) -> Result<LicenseHeader> {
    let project = resolve_project(config)?;
    let year = config.year.unwrap_or_else(|| chrono::Local::now().year());

    for reference in [&config.code_license, &config.content_license] {
        if !config.root.join(reference).exists() {
            debug!(file = %reference, "referenced license file not found");
        }
    }

    Ok(LicenseHeader {
        project,
        year,
        code_license: config.code_license.clone(),
        content_license: config.content_license.clone(),
    })
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mode: Mode,
    /// Files scanned
    pub scanned: usize,
    /// Files whose header changed (or would), relative to the root
    pub changed: Vec<PathBuf>,
}

impl Report {
    /// Check mode found files to update
    pub fn failed(&self) -> bool {
        self.mode == Mode::Check && !self.changed.is_empty()
    }

    /// Human readable summary, one file per line
    pub fn summary(&self) -> String {
        let n = self.changed.len();
        let mut out = match (self.mode, n) {
            (Mode::Check, 0) => return "All license headers are up to date.".to_string(),
            (Mode::DryRun, 0) => return "No changes needed.".to_string(),
            (Mode::Apply, 0) => return "No files required updates.".to_string(),
            (Mode::Check, n) => format!("License headers need updates in {} file(s):", n),
            (Mode::DryRun, n) => format!("Would update {} file(s):", n),
            (Mode::Apply, n) => format!("Updated {} file(s).", n),
        };
        for path in &self.changed {
            out.push_str(&format!("\n - {}", path.display()));
        }
        out
    }
}

/// Stamp one file; returns whether its content changed (or would)
pub fn process_file(path: &Path, header: &str, mode: Mode) -> Result<bool> {
    let original = fs::read_to_string(path).map_err(|e| LicenseError::io(path, e))?;
    let updated = stamp(&original, header);
    if updated == original {
        return Ok(false);
    }

    if mode.writes() {
        fs::write(path, updated).map_err(|e| LicenseError::io(path, e))?;
        debug!(path = %path.display(), "header written");
    }
    Ok(true)
}

/// Scan `config.root` and stamp every matching file according to `config.mode`
pub fn run(config: &HeaderConfig) -> Result<Report> {
    let header = build_header(config)?.render();
    let files = scan::find_files(config)?;
    info!(root = %config.root.display(), files = files.len(), mode = ?config.mode, "scanning");

    let mut changed = Vec::new();
    for path in &files {
        if process_file(path, &header, config.mode)? {
            let rel = path.strip_prefix(&config.root).unwrap_or(path);
            changed.push(rel.to_path_buf());
        }
    }

    Ok(Report {
        mode: config.mode,
        scanned: files.len(),
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config(root: &Path, mode: Mode) -> HeaderConfig {
        HeaderConfig::new(root).project("folio").year(2024).mode(mode)
    }

    #[test]
    fn test_resolve_project_from_package_json() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "package.json", r#"{ "name": "portfolio-spa", "version": "1.0.0" }"#);
        let name = resolve_project(&HeaderConfig::new(dir.path())).unwrap();
        assert_eq!(name, "portfolio-spa");
    }

    #[test]
    fn test_resolve_project_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "package.json", r#"{ "name": "from-json" }"#);
        let name = resolve_project(&HeaderConfig::new(dir.path()).project("cli")).unwrap();
        assert_eq!(name, "cli");
    }

    #[test]
    fn test_resolve_project_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = HeaderConfig::new(dir.path());
        assert!(matches!(resolve_project(&config), Err(LicenseError::MissingProjectName(_))));

        write(dir.path(), "package.json", "{ not json");
        assert!(matches!(resolve_project(&config), Err(LicenseError::PackageJson { .. })));

        write(dir.path(), "package.json", r#"{ "version": "1.0.0" }"#);
        assert!(matches!(resolve_project(&config), Err(LicenseError::MissingProjectName(_))));
    }

    #[test]
    fn test_run_apply_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "src/main.js", "// main\nimport './style.css';\n");
        write(root, "src/router.js", "export default class Router {}\n");

        let report = run(&config(root, Mode::Apply)).unwrap();
        assert_eq!(report.scanned, 2);
        assert_eq!(
            report.changed,
            vec![PathBuf::from("src/main.js"), PathBuf::from("src/router.js")]
        );
        assert!(!report.failed());

        let content = fs::read_to_string(root.join("src/main.js")).unwrap();
        assert!(content.starts_with(HEADER_START));
        assert!(content.ends_with("\n\nimport './style.css';\n"));

        let check = run(&config(root, Mode::Check)).unwrap();
        assert!(check.changed.is_empty());
        assert!(!check.failed());
        assert_eq!(check.summary(), "All license headers are up to date.");
    }

    #[test]
    fn test_run_check_and_dry_run_do_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "a.js", "const a = 1;\n");

        let check = run(&config(root, Mode::Check)).unwrap();
        assert!(check.failed());
        let dry = run(&config(root, Mode::DryRun)).unwrap();
        assert!(!dry.failed());
        assert_eq!(dry.changed, vec![PathBuf::from("a.js")]);

        assert_eq!(fs::read_to_string(root.join("a.js")).unwrap(), "const a = 1;\n");
    }

    #[test]
    fn test_summary() {
        let report = Report {
            mode: Mode::Check,
            scanned: 3,
            changed: vec![PathBuf::from("a.js"), PathBuf::from("b.js")],
        };
        assert_eq!(
            report.summary(),
            "License headers need updates in 2 file(s):\n - a.js\n - b.js"
        );

        let dry = Report {
            mode: Mode::DryRun,
            ..report.clone()
        };
        assert!(dry.summary().starts_with("Would update 2 file(s):"));

        let apply = Report {
            mode: Mode::Apply,
            changed: Vec::new(),
            ..report
        };
        assert_eq!(apply.summary(), "No files required updates.");
    }

    #[test]
    fn test_process_file_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.js");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            process_file(&path, "h\n", Mode::Apply),
            Err(LicenseError::Io { .. })
        ));
    }
}
