use depsym_cli::models::{AvailableVersions, DependencyRecord, NamedDependency, VersionMode};
use depsym_cli::naming::escape_identifier;
use depsym_cli::resolver::{NamingConfig, ResolvedSet, resolve};
use depsym_cli::version::StabilityPolicy;
use std::collections::{HashMap, HashSet};

fn records() -> Vec<DependencyRecord> {
    vec![
        DependencyRecord::new("com.squareup.okhttp3", "okhttp", "4.2.2"),
        DependencyRecord::new("com.squareup.okhttp3", "logging-interceptor", "4.2.2"),
        DependencyRecord::new("com.google.android.gms", "play-services-auth", "17.0.0"),
        DependencyRecord::new("com.google.firebase", "firebase-auth", "19.1.0"),
        DependencyRecord::new("com.example.a", "auth", "1.0"),
        DependencyRecord::new("com.example.b", "auth", "2.0"),
        DependencyRecord::new("com.example.c", "my-lib", "1.0"),
        DependencyRecord::new("com.example.d", "my.lib", "1.1"),
        DependencyRecord::new("androidx.core", "core", "1.1.0"),
        DependencyRecord::new("org.jetbrains.kotlinx", "kotlinx-coroutines-core", "1.3.2"),
        DependencyRecord::new("org.jetbrains.kotlinx", "kotlinx-coroutines-android", "1.3.2"),
        DependencyRecord::new("org.jetbrains.kotlinx", "kotlinx-serialization-runtime", "0.13.0"),
        DependencyRecord::new("io.reactivex.rxjava2", "rxjava", "2.2.13"),
        DependencyRecord::new("io.reactivex.rxjava2", "rxandroid", "2.1.1"),
    ]
}

fn resolved(records: Vec<DependencyRecord>) -> ResolvedSet {
    resolve(records, &NamingConfig::default()).unwrap()
}

fn by_coordinate<'a>(resolved: &'a ResolvedSet, coordinate: &str) -> &'a NamedDependency {
    resolved.iter().find(|d| d.record.coordinate() == coordinate).unwrap()
}

#[test]
fn test_version_symbols_are_unique_unless_grouped() {
    let resolved = resolved(records());

    let mut owners: HashMap<&str, Vec<&NamedDependency>> = HashMap::new();
    for dependency in &resolved {
        owners.entry(dependency.symbol_name.as_str()).or_default().push(dependency);
    }
    for (symbol, owners) in owners {
        if owners.len() > 1 {
            assert!(
                owners.iter().all(|d| d.mode == VersionMode::Group
                    && d.version_group == owners[0].version_group
                    && d.record.version == owners[0].record.version),
                "'{symbol}' shared by unrelated dependencies"
            );
        }
    }
}

#[test]
fn test_coordinate_symbols_are_unique() {
    let resolved = resolved(records());
    let symbols: HashSet<&str> = resolved.iter().map(|d| d.coordinate_symbol_name.as_str()).collect();
    assert_eq!(symbols.len(), resolved.len());
}

#[test]
fn test_symbols_are_escaped() {
    for dependency in &resolved(records()) {
        for symbol in [&dependency.symbol_name, &dependency.coordinate_symbol_name] {
            assert_eq!(*symbol, escape_identifier(symbol));
            assert!(!symbol.contains(&['-', '.', ':'][..]), "{symbol}");
        }
    }
}

#[test]
fn test_input_order_does_not_matter() {
    let expected = resolved(records());
    let expected: Vec<&NamedDependency> = expected.iter().collect();

    let mut reversed = records();
    reversed.reverse();
    let mut rotated = records();
    rotated.rotate_left(5);
    let mut interleaved: Vec<DependencyRecord> = records().into_iter().step_by(2).collect();
    interleaved.extend(records().into_iter().skip(1).step_by(2));

    for input in [reversed, rotated, interleaved] {
        let actual = resolved(input);
        assert_eq!(actual.iter().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_resolution_is_stable_across_runs() {
    let first = resolved(records());
    let second = resolved(records());
    assert_eq!(first.dependencies(), second.dependencies());
}

#[test]
fn test_shared_module_name_uses_group() {
    let resolved = resolved(records());
    assert_eq!(by_coordinate(&resolved, "com.example.a:auth").symbol_name, "com_example_a_auth");
    assert_eq!(by_coordinate(&resolved, "com.example.b:auth").symbol_name, "com_example_b_auth");
}

#[test]
fn test_escaping_collision_uses_group() {
    let resolved = resolved(records());
    let dash = by_coordinate(&resolved, "com.example.c:my-lib");
    let dot = by_coordinate(&resolved, "com.example.d:my.lib");
    assert_eq!(dash.mode, VersionMode::GroupModule);
    assert_eq!(dot.mode, VersionMode::GroupModule);
    assert_ne!(dash.symbol_name, dot.symbol_name);
}

#[test]
fn test_meaningless_name_uses_group() {
    let resolved = resolved(records());
    assert_eq!(by_coordinate(&resolved, "androidx.core:core").symbol_name, "androidx_core_core");
}

#[test]
fn test_unambiguous_names_stay_short() {
    let resolved = resolved(records());
    assert_eq!(by_coordinate(&resolved, "com.google.firebase:firebase-auth").symbol_name, "firebase_auth");
    assert_eq!(
        by_coordinate(&resolved, "com.google.android.gms:play-services-auth").symbol_name,
        "play_services_auth"
    );
}

#[test]
fn test_grouping() {
    let resolved = resolved(records());

    // Literal group, one shared version
    let okhttp = by_coordinate(&resolved, "com.squareup.okhttp3:okhttp");
    let interceptor = by_coordinate(&resolved, "com.squareup.okhttp3:logging-interceptor");
    assert_eq!(okhttp.mode, VersionMode::Group);
    assert_eq!(okhttp.symbol_name, "com_squareup_okhttp3");
    assert_eq!(interceptor.symbol_name, okhttp.symbol_name);
    assert_eq!(okhttp.coordinate_symbol_name, "okhttp");

    // Virtual group, one shared version
    let core = by_coordinate(&resolved, "org.jetbrains.kotlinx:kotlinx-coroutines-core");
    assert_eq!(core.symbol_name, "org_jetbrains_kotlinx_kotlinx_coroutines");

    // Single member of a virtual group still uses the label
    let serialization = by_coordinate(&resolved, "org.jetbrains.kotlinx:kotlinx-serialization-runtime");
    assert_eq!(serialization.mode, VersionMode::Group);
    assert_eq!(serialization.symbol_name, "org_jetbrains_kotlinx_kotlinx_serialization");

    // Different versions never share a symbol
    assert_eq!(by_coordinate(&resolved, "io.reactivex.rxjava2:rxjava").symbol_name, "rxjava");
    assert_eq!(by_coordinate(&resolved, "io.reactivex.rxjava2:rxandroid").symbol_name, "rxandroid");
}

#[test]
fn test_configured_override() {
    let config = NamingConfig::default().with_use_fqdn_for(["rxjava", "com.google.firebase"]);
    let resolved = resolve(records(), &config).unwrap();

    assert!(resolved.warnings().is_empty());
    assert_eq!(by_coordinate(&resolved, "io.reactivex.rxjava2:rxjava").symbol_name, "io_reactivex_rxjava2_rxjava");
    assert_eq!(
        by_coordinate(&resolved, "com.google.firebase:firebase-auth").symbol_name,
        "com_google_firebase_firebase_auth"
    );
}

#[test]
fn test_stale_override_is_reported_not_fatal() {
    let config = NamingConfig::default().with_use_fqdn_for(["rxjavaa"]);
    let resolved = resolve(records(), &config).unwrap();

    assert_eq!(resolved.len(), records().len());
    assert_eq!(resolved.warnings().len(), 1);
    assert!(resolved.warnings()[0].to_string().contains("rxjavaa"));
}

#[test]
fn test_reject_non_stable_only_changes_annotations() {
    let input = vec![
        DependencyRecord::new("com.example", "lib", "1.0").with_available(AvailableVersions {
            release: None,
            milestone: Some("2.0-M1".to_string()),
            integration: None,
        }),
    ];
    let accept = resolve(input.clone(), &NamingConfig::default()).unwrap();
    let reject = resolve(input, &NamingConfig::default().with_stability(StabilityPolicy::RejectNonStable)).unwrap();

    assert_eq!(accept.dependencies()[0].record.newer_version(), Some("2.0-M1"));
    assert_eq!(reject.dependencies()[0].record.newer_version(), None);
    assert_eq!(accept.dependencies()[0].symbol_name, reject.dependencies()[0].symbol_name);
}

#[test]
fn test_empty_input() {
    let resolved = resolved(Vec::new());
    assert!(resolved.is_empty());
    assert!(resolved.warnings().is_empty());
}
