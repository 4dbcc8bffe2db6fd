//! Generated `version.*` / `plugin.*` lines.

use std::collections::HashSet;

use tracing::debug;

use crate::constants::{AVAILABLE_MARKER, PLUGIN_MARKER_SUFFIX, PROPERTIES_HEADER};
use crate::models::{NamedDependency, VersionMode};
use crate::resolver::ResolvedSet;

/// Property key of a dependency, without its `version.` / `plugin.` prefix.
pub fn property_key(dependency: &NamedDependency) -> String {
    let record = &dependency.record;
    match dependency.mode {
        VersionMode::Module => record.module.clone(),
        VersionMode::Group => dependency.version_group.clone(),
        VersionMode::GroupModule => format!("{}..{}", record.group, record.module),
    }
}

/// Full property name, e.g. `version.okhttp` or `plugin.org.jetbrains.kotlin.jvm`.
pub fn property_name(dependency: &NamedDependency) -> String {
    match dependency.record.module.strip_suffix(PLUGIN_MARKER_SUFFIX) {
        Some(id) => format!("plugin.{id}"),
        None => format!("version.{}", property_key(dependency)),
    }
}

/// Comment line announcing `newer`, with its `=` under the property's `=`.
fn available_comment(name: &str, newer: &str) -> String {
    let padding = name.len().saturating_sub(AVAILABLE_MARKER.len());
    format!("#{}{AVAILABLE_MARKER}{newer}", " ".repeat(padding))
}

/// The whole generated block: header, then one line per distinct property.
///
/// Plugins come before libraries; otherwise the resolved order is kept. The
/// build-tool record and records without a version are left out.
pub fn generated_lines(resolved: &ResolvedSet) -> Vec<String> {
    let mut lines: Vec<String> = PROPERTIES_HEADER.iter().map(|line| (*line).to_string()).collect();

    let (plugins, libraries): (Vec<&NamedDependency>, Vec<&NamedDependency>) = resolved
        .iter()
        .filter(|dependency| !dependency.record.is_build_tool())
        .partition(|dependency| dependency.record.is_plugin());

    let mut seen = HashSet::new();
    for dependency in plugins.into_iter().chain(libraries) {
        if !dependency.record.has_version() {
            debug!("No version to track for {}", dependency.record.coordinate());
            continue;
        }
        let name = property_name(dependency);
        if !seen.insert(name.clone()) {
            continue;
        }

        lines.push(format!("{name}={}", dependency.record.version));
        if let Some(newer) = dependency.record.newer_version() {
            lines.push(available_comment(&name, newer));
        }
    }

    lines
}
