//! End-to-end tests for `vuecat check`.

// assert_cmd::Command::cargo_bin is deprecated but still works
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn vuecat(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vuecat").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_lists_units_without_writing() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/components/greeting/index.js", "g(_TEMPLATE)");
    write(temp.path(), "src/components/greeting/template.html", "<p>Hi</p>");
    write(temp.path(), "src/filters/b.js", "b");
    write(temp.path(), "src/filters/a.js", "a");
    write(
        temp.path(),
        "vuecat.config.json",
        r#"{ "targets": { "app": { "src": "src", "dest": "dist/app.js" } } }"#,
    );

    let assert = vuecat(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Target 'app': src -> dist/app.js (3 units)"))
        .stderr(predicate::str::contains("Configuration is valid"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().map(str::trim).collect();
    assert_eq!(
        lines,
        vec![
            "components/greeting/index.js + components/greeting/template.html",
            "filters/a.js",
            "filters/b.js",
        ]
    );
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn check_reports_invalid_target() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "vuecat.config.json",
        r#"{ "targets": { "app": { "src": "nope", "dest": "out.js" } } }"#,
    );

    vuecat(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target 'app'"))
        .stderr(predicate::str::contains("Invalid source directory"));
}

#[test]
fn check_unknown_target() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "vuecat.config.json",
        r#"{ "targets": { "app": { "src": "src", "dest": "out.js" } } }"#,
    );

    vuecat(temp.path())
        .args(["check", "docs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target 'docs' not found"));
}

#[test]
fn check_schema_prints_json() {
    let temp = TempDir::new().unwrap();

    let assert = vuecat(temp.path()).args(["check", "--schema"]).assert().success();
    let schema: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert!(schema["properties"]["targets"].is_object());
}
