use depsym_cli::models::VersionMode;
use depsym_cli::render::{KotlinOptions, render_libs, render_versions};
use depsym_cli::report::{flatten, parse_report};
use depsym_cli::resolver::{NamingConfig, ResolvedSet, resolve_graph};
use depsym_cli::test_utils::{ReportBuilder, SAMPLE_REPORT, init_test_logging};

fn sample() -> ResolvedSet {
    init_test_logging(None);
    let graph = parse_report(SAMPLE_REPORT).unwrap();
    resolve_graph(&graph, &NamingConfig::default()).unwrap()
}

#[test]
fn test_sample_names() {
    let resolved = sample();
    let names: Vec<(&str, &str, VersionMode)> = resolved
        .iter()
        .map(|d| (d.symbol_name.as_str(), d.coordinate_symbol_name.as_str(), d.mode))
        .collect();

    assert_eq!(
        names,
        vec![
            ("androidx_core_core", "androidx_core_core", VersionMode::GroupModule),
            ("androidx_room", "room_compiler", VersionMode::Group),
            ("androidx_room", "room_runtime", VersionMode::Group),
            ("gradlelatestversion", "gradlelatestversion", VersionMode::Module),
            ("guava", "guava", VersionMode::Module),
            ("legacy", "legacy", VersionMode::Module),
            ("okhttp", "okhttp", VersionMode::Module),
            (
                "org_jetbrains_kotlin_jvm_gradle_plugin",
                "org_jetbrains_kotlin_jvm_gradle_plugin",
                VersionMode::Module
            ),
            (
                "org_jetbrains_kotlinx_kotlinx_coroutines",
                "kotlinx_coroutines_android",
                VersionMode::Group
            ),
            ("org_jetbrains_kotlinx_kotlinx_coroutines", "kotlinx_coroutines_core", VersionMode::Group),
        ]
    );
}

#[test]
fn test_sample_versions_object() {
    let source = render_versions(&sample(), &KotlinOptions::default()).unwrap();

    assert!(source.contains("object Versions {"));
    assert!(source.contains("    const val org_jetbrains_kotlinx_kotlinx_coroutines: String = \"1.3.2\""));
    assert!(source.contains("    const val androidx_room: String = \"2.2.1\""));
    assert!(source.contains("    const val okhttp: String = \"3.12.1\" // available: \"4.2.2\""));
    assert!(source.contains("    const val legacy: String = \"none\" // No version to track"));
    assert!(source.contains("    const val gradleLatestVersion: String = \"6.0.1\""));
    assert!(source.contains("Current version: \"5.6.2\""));
    assert_eq!(source.matches("androidx_room:").count(), 1);
    assert!(source.trim_end().ends_with('}'));
}

#[test]
fn test_sample_libs_object() {
    let source = render_libs(&sample(), &KotlinOptions::default()).unwrap();

    assert!(source.contains("object Libs {"));
    assert!(source.contains("const val room_runtime: String = \"androidx.room:room-runtime:\" + Versions.androidx_room"));
    assert!(source.contains("const val room_compiler: String = \"androidx.room:room-compiler:\" + Versions.androidx_room"));
    assert!(source.contains("const val legacy: String = \"com.example:legacy\""));
    assert!(source.contains("     * https://github.com/google/guava"));
    assert!(!source.contains("gradleLatestVersion"));
}

#[test]
fn test_builder_report_round_trips_through_json() {
    let report = ReportBuilder::new()
        .current("com.google.guava", "guava", "28.1-jre")
        .outdated("com.squareup.okhttp3", "okhttp", "3.12.1", "4.2.2")
        .unresolved("com.example", "legacy")
        .gradle("5.6.2", "5.6.2");

    let graph = parse_report(&report.to_json()).unwrap();
    assert_eq!(graph, report.clone().build());

    let records = flatten(&graph).unwrap();
    let modules: Vec<&str> = records.iter().map(|r| r.module.as_str()).collect();
    assert_eq!(modules, vec!["guava", "okhttp", "legacy", "gradleLatestVersion"]);
    assert_eq!(records[2].version, "none");
    assert!(records[3].available.is_none());
}

#[test]
fn test_malformed_report_is_fatal() {
    let graph = parse_report(r#"{ "outdated": { "dependencies": [ { "name": "okhttp", "version": "1.0" } ] } }"#).unwrap();
    let err = resolve_graph(&graph, &NamingConfig::default()).unwrap_err();
    assert!(err.to_string().contains("'outdated'"));
}
