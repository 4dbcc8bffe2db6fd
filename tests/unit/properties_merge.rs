use depsym_cli::constants::PROPERTIES_HEADER;
use depsym_cli::properties::{generated_lines, merge_lines, update_properties};
use depsym_cli::report::parse_report;
use depsym_cli::resolver::{NamingConfig, ResolvedSet, resolve_graph};
use depsym_cli::test_utils::SAMPLE_REPORT;
use tempfile::TempDir;

fn sample() -> ResolvedSet {
    resolve_graph(&parse_report(SAMPLE_REPORT).unwrap(), &NamingConfig::default()).unwrap()
}

#[test]
fn test_sample_block() {
    let lines = generated_lines(&sample());
    assert_eq!(&lines[..PROPERTIES_HEADER.len()], PROPERTIES_HEADER);
    assert_eq!(
        &lines[PROPERTIES_HEADER.len()..],
        [
            "plugin.org.jetbrains.kotlin.jvm=1.3.50",
            "version.androidx.core..core=1.1.0",
            "version.androidx.room=2.2.1",
            "version.guava=28.1-jre",
            "version.okhttp=3.12.1",
            "#  # available=4.2.2",
            "version.org.jetbrains.kotlinx.kotlinx-coroutines=1.3.2",
        ]
    );
}

#[test]
fn test_user_lines_survive_in_order() {
    let existing = "org.gradle.jvmargs=-Xmx2g\n# keep me\nversion.okhttp=1.0\n#  # available=2.0\nandroid.useAndroidX=true";
    let merged = merge_lines(existing, &generated_lines(&sample()));
    let lines: Vec<&str> = merged.lines().collect();

    assert_eq!(&lines[..3], ["org.gradle.jvmargs=-Xmx2g", "# keep me", "android.useAndroidX=true"]);
    assert_eq!(lines[3], PROPERTIES_HEADER[0]);
    assert!(!merged.contains("version.okhttp=1.0"));
    assert!(!merged.contains("available=2.0"));
}

#[test]
fn test_merge_is_idempotent() {
    let generated = generated_lines(&sample());
    let once = merge_lines("a=1\nb=2", &generated);
    let twice = merge_lines(&once, &generated);
    assert_eq!(once, twice);
}

#[test]
fn test_update_properties_on_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gradle.properties");
    std::fs::write(&path, "kotlin.code.style=official\n").unwrap();

    let resolved = sample();
    let written = update_properties(&path, &resolved).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, first.lines().count() - 1);

    update_properties(&path, &resolved).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
    assert!(first.starts_with("kotlin.code.style=official\n"));
}

#[test]
fn test_update_properties_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gradle.properties");

    update_properties(&path, &sample()).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(PROPERTIES_HEADER[0]));
}
