use depsym_cli::test_utils::{ReportBuilder, SAMPLE_REPORT, write_project};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::depsym;

#[test]
fn test_missing_report() {
    let temp = TempDir::new().unwrap();

    depsym(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Dependency report not found"))
        .stderr(predicate::str::contains("dependencyUpdates"));
}

#[test]
fn test_invalid_report_json() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "{ not json", None);

    depsym(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dependency report"));
}

#[test]
fn test_malformed_report_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_project(
        temp.path(),
        r#"{ "current": { "dependencies": [ { "group": "com.example", "version": "1.0" } ] } }"#,
        None,
    );

    depsym(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed dependency report"));
    assert!(!temp.path().join("buildSrc").exists());
}

#[test]
fn test_invalid_config() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, Some("libs-name = \"my-libs\"\n"));

    depsym(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, Some("use-fdqn-for = [\"okhttp\"]\n"));

    depsym(temp.path()).arg("generate").assert().failure().stderr(predicate::str::contains("use-fdqn-for"));
}

#[test]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), &ReportBuilder::new().current("com.example", "lib", "1.0").to_json(), None);
    let config = temp.path().join("other.toml");
    fs::write(&config, "libs-name = \"Deps\"\n").unwrap();

    depsym(temp.path()).arg("--config").arg(&config).args(["-q", "generate"]).assert().success();
    assert!(temp.path().join("buildSrc/src/main/kotlin/Deps.kt").exists());
}

#[test]
fn test_libs_name_clashing_with_default_versions_name() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, Some("libs-name = \"Versions\"\n"));

    depsym(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("both resolve to 'Versions'"));
    assert!(!temp.path().join("buildSrc").exists());
}
