use depsym_cli::test_utils::{SAMPLE_REPORT, write_project};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::depsym;

#[test]
fn test_properties_merges_into_existing_file() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, None);
    let path = temp.path().join("gradle.properties");
    fs::write(&path, "org.gradle.jvmargs=-Xmx2g\nversion.okhttp=3.0.0\n").unwrap();

    depsym(temp.path())
        .arg("properties")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("org.gradle.jvmargs=-Xmx2g\n"));
    assert!(content.contains("plugin.org.jetbrains.kotlin.jvm=1.3.50"));
    assert!(content.contains("version.okhttp=3.12.1\n#  # available=4.2.2"));
    assert!(!content.contains("version.okhttp=3.0.0"));
}

#[test]
fn test_properties_is_idempotent() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, None);
    let path = temp.path().join("custom.properties");

    depsym(temp.path()).arg("properties").arg("--file").arg(&path).assert().success();
    let first = fs::read_to_string(&path).unwrap();
    depsym(temp.path()).arg("properties").arg("--file").arg(&path).assert().success();

    assert_eq!(fs::read_to_string(&path).unwrap(), first);
    assert!(!temp.path().join("gradle.properties").exists());
}

#[test]
fn test_properties_unwritable_target() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, None);
    fs::create_dir(temp.path().join("gradle.properties")).unwrap();

    depsym(temp.path())
        .arg("properties")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot write file"));
}
