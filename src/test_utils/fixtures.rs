//! Test fixtures for dependency reports and project directories
//!
//! [`SAMPLE_REPORT`] covers every naming rule once: a plain module, a
//! generic module name, a virtual group, a literal group sharing one
//! version, a plugin marker, an unresolved entry and the build tool.
//! [`ReportBuilder`] assembles smaller reports in code.

use std::fs;
use std::path::Path;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_REPORT_PATH};
use crate::models::AvailableVersions;
use crate::report::{BuildToolVersions, DependencyGraph, Observation, Section};

/// A realistic report as written by the dependency-updates task.
pub const SAMPLE_REPORT: &str = r#"{
  "current": {
    "dependencies": [
      { "group": "com.google.guava", "name": "guava", "version": "28.1-jre",
        "projectUrl": "https://github.com/google/guava" },
      { "group": "org.jetbrains.kotlinx", "name": "kotlinx-coroutines-core", "version": "1.3.2" },
      { "group": "org.jetbrains.kotlinx", "name": "kotlinx-coroutines-android", "version": "1.3.2" },
      { "group": "androidx.room", "name": "room-runtime", "version": "2.2.1" },
      { "group": "androidx.room", "name": "room-compiler", "version": "2.2.1" },
      { "group": "androidx.core", "name": "core", "version": "1.1.0" },
      { "group": "org.jetbrains.kotlin.jvm", "name": "org.jetbrains.kotlin.jvm.gradle.plugin", "version": "1.3.50" }
    ],
    "count": 7
  },
  "exceeded": { "dependencies": [], "count": 0 },
  "outdated": {
    "dependencies": [
      { "group": "com.squareup.okhttp3", "name": "okhttp", "version": "3.12.1",
        "available": { "release": "4.2.2", "milestone": null, "integration": null } }
    ],
    "count": 1
  },
  "unresolved": {
    "dependencies": [ { "group": "com.example", "name": "legacy", "version": null } ],
    "count": 1
  },
  "count": 9,
  "gradle": {
    "enabled": true,
    "running": { "version": "5.6.2", "reason": "", "isUpdateAvailable": false, "isFailure": false },
    "current": { "version": "6.0.1", "reason": "", "isUpdateAvailable": true, "isFailure": false }
  }
}"#;

/// Builder for in-memory reports.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    graph: DependencyGraph,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency to the `current` section.
    pub fn current(mut self, group: &str, name: &str, version: &str) -> Self {
        push(&mut self.graph.current, Observation::new(group, name, version));
        self
    }

    /// Add a dependency with a newer release to the `outdated` section.
    pub fn outdated(mut self, group: &str, name: &str, version: &str, release: &str) -> Self {
        push(
            &mut self.graph.outdated,
            Observation::new(group, name, version).with_available(AvailableVersions::release(release)),
        );
        self
    }

    /// Add a dependency without a version to the `unresolved` section.
    pub fn unresolved(mut self, group: &str, name: &str) -> Self {
        let observation = Observation {
            group: Some(group.to_string()),
            name: Some(name.to_string()),
            ..Observation::default()
        };
        push(&mut self.graph.unresolved, observation);
        self
    }

    pub fn gradle(mut self, running: &str, current: &str) -> Self {
        self.graph.gradle = BuildToolVersions::new(running, current);
        self
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.graph).expect("Failed to serialize report")
    }
}

fn push(section: &mut Section, observation: Observation) {
    section.dependencies.push(observation);
    section.count = section.dependencies.len();
}

/// Lay out a project: the report at its default location, plus `depsym.toml` when given.
pub fn write_project(dir: &Path, report_json: &str, config: Option<&str>) {
    let report_path = dir.join(DEFAULT_REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create report directory");
    }
    fs::write(&report_path, report_json).expect("Failed to write report");

    if let Some(config) = config {
        fs::write(dir.join(CONFIG_FILE_NAME), config).expect("Failed to write depsym.toml");
    }
}
