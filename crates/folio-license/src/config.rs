//! Header run configuration

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory names never descended into
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    "dist",
    ".git",
    ".next",
    ".cache",
    "coverage",
    "build",
    "out",
    "tmp",
    "temp",
    "target",
];

/// What to do with files whose header is out of date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Rewrite files
    #[default]
    Apply,
    /// Report only; a non-empty report is a failure
    Check,
    /// Report only
    DryRun,
}

impl Mode {
    pub fn writes(self) -> bool {
        self == Mode::Apply
    }
}

/// Header run configuration
#[derive(Debug, Clone)]
pub struct HeaderConfig {
    /// Directory to scan; reported paths are relative to it
    pub root: PathBuf,
    /// Project name; read from package.json when `None`
    pub project: Option<String>,
    /// Copyright year; current year when `None`
    pub year: Option<i32>,
    /// File extensions to stamp, without the dot
    pub extensions: Vec<String>,
    /// Directory names to skip
    pub excludes: BTreeSet<String>,
    /// File referenced as the code license
    pub code_license: String,
    /// File referenced as the content license
    pub content_license: String,
    pub mode: Mode,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            project: None,
            year: None,
            extensions: vec!["js".to_string()],
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            code_license: "LICENSE-CODE".to_string(),
            content_license: "LICENSE-CONTENT".to_string(),
            mode: Mode::Apply,
        }
    }
}

impl HeaderConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn project(mut self, name: impl Into<String>) -> Self {
        self.project = Some(name.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the extension list
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Skip another directory name, on top of the defaults
    pub fn exclude(mut self, dir: impl Into<String>) -> Self {
        self.excludes.insert(dir.into());
        self
    }

    pub fn is_excluded(&self, dir_name: &OsStr) -> bool {
        dir_name
            .to_str()
            .is_some_and(|name| self.excludes.contains(name))
    }

    /// Exact extension match: `.mjs` is not `.js`
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
