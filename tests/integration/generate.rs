use depsym_cli::test_utils::{SAMPLE_REPORT, write_project};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::depsym;

#[test]
fn test_generate_writes_buildsrc() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, None);

    depsym(temp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Versions.kt"))
        .stdout(predicate::str::contains("Libs.kt"))
        .stdout(predicate::str::contains("Created"));

    let kotlin = temp.path().join("buildSrc/src/main/kotlin");
    let versions = fs::read_to_string(kotlin.join("Versions.kt")).unwrap();
    let libs = fs::read_to_string(kotlin.join("Libs.kt")).unwrap();

    assert!(versions.contains("const val androidx_room: String = \"2.2.1\""));
    assert!(libs.contains("const val androidx_core_core: String = \"androidx.core:core:\" + Versions.androidx_core_core"));
    assert_eq!(
        fs::read_to_string(temp.path().join("buildSrc/.gitignore")).unwrap(),
        ".gradle/\nbuild/\n"
    );
}

#[test]
fn test_generate_twice_is_identical() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SAMPLE_REPORT, None);
    let versions = temp.path().join("buildSrc/src/main/kotlin/Versions.kt");

    depsym(temp.path()).arg("generate").assert().success();
    let first = fs::read_to_string(&versions).unwrap();

    depsym(temp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not());
    assert_eq!(fs::read_to_string(&versions).unwrap(), first);
}

#[test]
fn test_generate_with_config() {
    let temp = TempDir::new().unwrap();
    write_project(
        temp.path(),
        SAMPLE_REPORT,
        Some("versions-name = \"Vers\"\nuse-fqdn-for = [\"okhttp\"]\nbuildsrc-dir = \"build-logic\"\n"),
    );

    depsym(temp.path()).args(["--quiet", "generate"]).assert().success().stdout(predicate::str::is_empty());

    let kotlin = temp.path().join("build-logic/src/main/kotlin");
    let versions = fs::read_to_string(kotlin.join("Vers.kt")).unwrap();
    let libs = fs::read_to_string(kotlin.join("Libs.kt")).unwrap();
    assert!(versions.contains("object Vers {"));
    assert!(versions.contains("const val com_squareup_okhttp3_okhttp: String = \"3.12.1\""));
    assert!(libs.contains("+ Vers.com_squareup_okhttp3_okhttp"));
}

#[test]
fn test_generate_explicit_report_and_output() {
    let temp = TempDir::new().unwrap();
    let report = temp.path().join("deps.json");
    fs::write(&report, SAMPLE_REPORT).unwrap();
    let output = temp.path().join("out");

    depsym(temp.path())
        .arg("generate")
        .arg("--report")
        .arg(&report)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.join("src/main/kotlin/Versions.kt").exists());
}
