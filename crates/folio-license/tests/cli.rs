use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn cli(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio-license").unwrap();
    cmd.arg("--root").arg(root).arg("--year").arg("2024");
    cmd
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "package.json", r#"{ "name": "portfolio-spa" }"#);
    write(dir.path(), "src/router.js", "// src/router.js\nclass SimpleRouter {}\n");
    write(dir.path(), "node_modules/dep/index.js", "module.exports = 1;\n");
    dir
}

#[test]
fn check_fails_when_headers_missing() {
    let dir = fixture();
    cli(dir.path())
        .arg("--check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("License headers need updates in 1 file(s):"))
        .stderr(predicate::str::contains("router.js"));
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = fixture();
    cli(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update 1 file(s):"));

    let content = fs::read_to_string(dir.path().join("src/router.js")).unwrap();
    assert_eq!(content, "// src/router.js\nclass SimpleRouter {}\n");
}

#[test]
fn apply_then_check_passes() {
    let dir = fixture();
    cli(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 file(s)."));

    let content = fs::read_to_string(dir.path().join("src/router.js")).unwrap();
    assert!(content.contains("Copyright (c) 2024 portfolio-spa"));
    assert!(content.ends_with("\n\nclass SimpleRouter {}\n"));

    let untouched = fs::read_to_string(dir.path().join("node_modules/dep/index.js")).unwrap();
    assert_eq!(untouched, "module.exports = 1;\n");

    cli(dir.path())
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All license headers are up to date."));
}

#[test]
fn check_and_dry_run_conflict() {
    let dir = fixture();
    cli(dir.path()).arg("--check").arg("--dry-run").assert().failure();
}

#[test]
fn missing_project_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.js", "const a = 1;\n");
    cli(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project name unknown"));
}

#[test]
fn error_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.js", "const a = 1;\n");
    let output = cli(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Project name unknown").count(), 1);
}

#[test]
fn logs_progress_at_info_by_default() {
    let dir = fixture();
    cli(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("scanning"));
}
