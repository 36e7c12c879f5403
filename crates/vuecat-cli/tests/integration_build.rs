//! End-to-end tests for `vuecat build`.

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

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "src/components/greeting/index.js", "Vue.component('greeting', _TEMPLATE)");
    write(root, "src/components/greeting/template.html", "<p>\n  Hi\n</p>\n");
    write(root, "src/filters/upper.js", "Vue.filter('upper', s => s.toUpperCase())");
    write(root, "src/mixins/log.js", "var log = {}");
    temp
}

fn vuecat(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vuecat").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("VUECAT_OPTIONS__QUOTECHAR")
        .env_remove("VUECAT_TARGETS__APP__DEST");
    cmd
}

#[test]
fn build_from_flags_without_config() {
    let temp = project();

    vuecat(temp.path())
        .args(["build", "--src", "src", "--dest", "dist/app.js"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created dist/app.js"))
        .stderr(predicate::str::is_match(r"\d+\.\d{2}kb").unwrap());

    let out = fs::read_to_string(temp.path().join("dist/app.js")).unwrap();
    assert_eq!(
        out,
        "Vue.component('greeting', '<p>Hi</p>')\nVue.filter('upper', s => s.toUpperCase())\nvar log = {}"
    );
}

#[test]
fn build_all_targets_from_config() {
    let temp = project();
    write(
        temp.path(),
        "vuecat.config.json",
        r#"{
            "options": { "separator": "\n;\n" },
            "targets": {
                "app": { "src": "src", "dest": "dist/app.js" },
                "lite": {
                    "src": "src",
                    "dest": "dist/lite.js",
                    "options": { "includeOnly": { "mixins": "all" } }
                }
            }
        }"#,
    );

    vuecat(temp.path())
        .arg("build")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created dist/app.js"))
        .stderr(predicate::str::contains("Created dist/lite.js"));

    let app = fs::read_to_string(temp.path().join("dist/app.js")).unwrap();
    assert!(app.contains("'<p>Hi</p>')\n;\nVue.filter"));
    let lite = fs::read_to_string(temp.path().join("dist/lite.js")).unwrap();
    assert_eq!(lite, "var log = {}");
}

#[test]
fn build_named_target_only() {
    let temp = project();
    write(
        temp.path(),
        "vuecat.config.json",
        r#"{ "targets": {
            "app": { "src": "src", "dest": "dist/app.js" },
            "other": { "src": "src", "dest": "dist/other.js" }
        } }"#,
    );

    vuecat(temp.path()).args(["build", "other"]).assert().success();

    assert!(temp.path().join("dist/other.js").exists());
    assert!(!temp.path().join("dist/app.js").exists());
}

#[test]
fn build_flags_override_config() {
    let temp = project();
    write(
        temp.path(),
        "vuecat.config.json",
        r#"{ "targets": { "app": { "src": "src", "dest": "dist/app.js",
            "options": { "exclude": { "filters": "all", "mixins": "all" } } } } }"#,
    );

    vuecat(temp.path())
        .args(["build", "--quote-char", "\"", "--no-htmlmin"])
        .assert()
        .success();

    let out = fs::read_to_string(temp.path().join("dist/app.js")).unwrap();
    assert_eq!(
        out,
        "Vue.component('greeting', \"<p>\\n\" +\n    \"  Hi\\n\" +\n    \"</p>\\n\" +\n    \"\")"
    );
}

#[test]
fn build_with_define_substitutes_template() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/components/ver/index.js", "v(_TEMPLATE)");
    write(temp.path(), "src/components/ver/template.html", "<b>${ version }</b>");

    vuecat(temp.path())
        .args(["build", "-s", "src", "-d", "out.js", "--define", "version=1.2.0"])
        .assert()
        .success();

    let out = fs::read_to_string(temp.path().join("out.js")).unwrap();
    assert_eq!(out, "v('<b>1.2.0</b>')");
}

#[test]
fn config_error_skips_target_and_fails() {
    let temp = project();
    write(
        temp.path(),
        "vuecat.config.json",
        r#"{ "targets": {
            "broken": { "src": "missing-dir", "dest": "dist/broken.js" },
            "nodest": { "src": "src" },
            "ok": { "src": "src", "dest": "dist/ok.js" }
        } }"#,
    );

    vuecat(temp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Skipping target 'broken'"))
        .stderr(predicate::str::contains("Skipping target 'nodest'"))
        .stderr(predicate::str::contains("Created dist/ok.js"))
        .stderr(predicate::str::contains("2 of 3 target(s) skipped"));

    assert!(temp.path().join("dist/ok.js").exists());
    assert!(!temp.path().join("dist/broken.js").exists());
}

#[test]
fn minify_error_is_fatal() {
    let temp = project();
    write(temp.path(), "src/components/bad/index.js", "b(_TEMPLATE)");
    write(temp.path(), "src/components/bad/template.html", "<div class=\"x\"");

    vuecat(temp.path())
        .args(["build", "--src", "src", "--dest", "dist/app.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template.html"))
        .stderr(predicate::str::contains("Parse Error"));

    assert!(!temp.path().join("dist/app.js").exists());
}

#[test]
fn missing_component_script_is_fatal() {
    let temp = project();
    write(temp.path(), "src/components/orphan/template.html", "<p>x</p>");

    vuecat(temp.path())
        .args(["build", "--src", "src", "--dest", "dist/app.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("orphan"));
}

#[test]
fn no_config_and_no_flags_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    vuecat(temp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vuecat.config.json"));
}

#[test]
fn cwd_flag_resolves_paths() {
    let temp = project();
    let outer = TempDir::new().unwrap();

    vuecat(outer.path())
        .args(["build", "--src", "src", "--dest", "dist/app.js", "--cwd"])
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("dist/app.js").exists());
}

#[test]
fn quiet_suppresses_success_line() {
    let temp = project();

    vuecat(temp.path())
        .args(["--quiet", "build", "--src", "src", "--dest", "dist/app.js"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created").not());
}
