//! Serde model of the dependency-updates JSON report.

use serde::{Deserialize, Serialize};

use crate::models::AvailableVersions;

/// The whole report: four dependency sections plus the build tool's versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Dependencies already at their latest version
    #[serde(default)]
    pub current: Section,
    /// Dependencies whose used version is newer than anything published
    #[serde(default)]
    pub exceeded: Section,
    /// Dependencies with newer versions available
    #[serde(default)]
    pub outdated: Section,
    /// Dependencies the tool could not resolve
    #[serde(default)]
    pub unresolved: Section,
    /// Running and latest-known build tool versions
    #[serde(default)]
    pub gradle: BuildToolVersions,
}

impl DependencyGraph {
    /// Sections in flattening order, with their report names.
    pub fn sections(&self) -> [(&'static str, &Section); 4] {
        [
            ("current", &self.current),
            ("exceeded", &self.exceeded),
            ("outdated", &self.outdated),
            ("unresolved", &self.unresolved),
        ]
    }
}

/// One report section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub dependencies: Vec<Observation>,
    #[serde(default)]
    pub count: usize,
}

impl Section {
    pub fn new(dependencies: Vec<Observation>) -> Self {
        let count = dependencies.len();
        Self {
            dependencies,
            count,
        }
    }
}

/// A single dependency as the report describes it.
///
/// Group and name are optional here so a broken report can be reported
/// precisely instead of failing deserialization as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub available: Option<AvailableVersions>,
}

impl Observation {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_available(mut self, available: AvailableVersions) -> Self {
        self.available = Some(available);
        self
    }
}

/// Build tool version pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildToolVersions {
    /// Version executing the build
    #[serde(default)]
    pub running: ToolVersion,
    /// Latest version known to the report producer
    #[serde(default)]
    pub current: ToolVersion,
}

impl BuildToolVersions {
    pub fn new(running: &str, current: &str) -> Self {
        Self {
            running: ToolVersion::new(running),
            current: ToolVersion::new(current),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolVersion {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub is_update_available: bool,
    #[serde(default)]
    pub is_failure: bool,
}

impl ToolVersion {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..Self::default()
        }
    }
}
