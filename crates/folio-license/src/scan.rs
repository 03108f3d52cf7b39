//! Source file discovery

use crate::config::HeaderConfig;
use crate::error::Result;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Files under `config.root` with a configured extension, skipping
/// excluded directories. Sorted for stable output.
pub fn find_files(config: &HeaderConfig) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            // Never filter the root itself, even if it is called `build`
            entry.depth() == 0
                || !(entry.file_type().is_dir() && config.is_excluded(entry.file_name()))
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && config.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_find_files_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "src/main.js");
        touch(root, "src/views/home.js");
        touch(root, "scripts/apply.mjs");
        touch(root, "node_modules/pkg/index.js");
        touch(root, "dist/assets/app.js");
        touch(root, "src/dist/bundle.js");
        touch(root, "README.md");

        let files = find_files(&HeaderConfig::new(root)).unwrap();
        assert_eq!(relative(root, files), vec!["src/main.js", "src/views/home.js"]);
    }

    #[test]
    fn test_find_files_custom_excludes_and_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "src/a.ts");
        touch(root, "src/b.js");
        touch(root, "vendor/c.ts");

        let config = HeaderConfig::new(root).extensions(["ts"]).exclude("vendor");
        let files = find_files(&config).unwrap();
        assert_eq!(relative(root, files), vec!["src/a.ts"]);
    }

    #[test]
    fn test_root_named_like_exclude() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("build");
        touch(&root, "a.js");

        let files = find_files(&HeaderConfig::new(&root)).unwrap();
        assert_eq!(relative(&root, files), vec!["a.js"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_files(&HeaderConfig::new(dir.path().join("nope"))).is_err());
    }
}
