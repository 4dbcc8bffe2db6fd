use depsym_cli::test_utils::{SAMPLE_REPORT, write_project};
use predicates::prelude::*;
use tempfile::TempDir;

use super::depsym;

#[test]
fn test_list_table() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, None);

    depsym(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency"))
        .stdout(predicate::str::contains("Version symbol"))
        .stdout(predicate::str::contains("com.squareup.okhttp3:okhttp"))
        .stdout(predicate::str::contains("GROUP_MODULE"))
        .stdout(predicate::str::contains("Summary:"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, None);

    let output = depsym(temp.path()).args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dependencies = value["dependencies"].as_array().unwrap();
    assert_eq!(dependencies.len(), 10);
    assert_eq!(value["summary"]["version_symbols"], 8);

    let room: Vec<&serde_json::Value> = dependencies.iter().filter(|d| d["group"] == "androidx.room").collect();
    assert_eq!(room.len(), 2);
    assert!(room.iter().all(|d| d["mode"] == "GROUP" && d["symbol_name"] == "androidx_room"));
}

#[test]
fn test_list_reports_stale_override() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, Some("use-fqdn-for = [\"okhtp\"]\n"));

    depsym(temp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("okhtp"))
        .stderr(predicate::str::contains("okhttp"));

    let output = depsym(temp.path()).args(["list", "--format", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn test_piped_stderr_has_no_escape_codes() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, Some("use-fqdn-for = [\"okhtp\"]\n"));

    depsym(temp.path())
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not match any dependency"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
