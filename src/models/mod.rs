//! Shared data models for the naming pipeline
//!
//! A dependency moves through the pipeline as two kinds of values:
//!
//! - [`DependencyRecord`] - a flattened report entry (coordinate, version,
//!   update candidates). Produced once by the report flattener and never
//!   mutated afterwards.
//! - [`NamedDependency`] - a record plus the naming decision made for it
//!   ([`VersionMode`] and the two generated symbols). Each resolver pass builds
//!   new `NamedDependency` values instead of editing existing ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{BUILD_TOOL_GROUP, GRADLE_LATEST_VERSION, NO_VERSION, PLUGIN_MARKER_SUFFIX};

/// Newer versions offered by the report, one per release channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableVersions {
    /// Next stable release
    #[serde(default)]
    pub release: Option<String>,
    /// Next milestone (pre-release)
    #[serde(default)]
    pub milestone: Option<String>,
    /// Next integration (snapshot) build
    #[serde(default)]
    pub integration: Option<String>,
}

impl AvailableVersions {
    /// Candidate offering only a release version.
    pub fn release(version: impl Into<String>) -> Self {
        Self {
            release: Some(version.into()),
            ..Self::default()
        }
    }

    /// First non-blank candidate in channel order release, milestone, integration.
    pub fn newest(&self) -> Option<&str> {
        [&self.release, &self.milestone, &self.integration]
            .into_iter()
            .flatten()
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }

    /// Copy keeping only the candidates accepted by `keep`.
    ///
    /// Returns `None` when no candidate survives.
    pub fn retain(&self, keep: impl Fn(&str) -> bool) -> Option<Self> {
        let filter = |v: &Option<String>| v.as_ref().filter(|v| keep(v.trim())).cloned();
        let retained = Self {
            release: filter(&self.release),
            milestone: filter(&self.milestone),
            integration: filter(&self.integration),
        };
        retained.newest().is_some().then_some(retained)
    }
}

/// One dependency observation, flattened out of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRecord {
    /// Dotted coordinate namespace
    pub group: String,
    /// Module name within the group
    pub module: String,
    /// Resolved version, or `"none"` when there is nothing to track
    pub version: String,
    /// Newer candidates, used for annotations only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<AvailableVersions>,
    /// Project home page, rendered as documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
}

impl DependencyRecord {
    pub fn new(group: impl Into<String>, module: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
            version: version.into(),
            available: None,
            project_url: None,
        }
    }

    #[must_use]
    pub fn with_available(mut self, available: AvailableVersions) -> Self {
        self.available = Some(available);
        self
    }

    #[must_use]
    pub fn with_project_url(mut self, url: impl Into<String>) -> Self {
        self.project_url = Some(url.into());
        self
    }

    /// `group:module`
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group, self.module)
    }

    /// False for the `"none"` sentinel.
    pub fn has_version(&self) -> bool {
        self.version != NO_VERSION
    }

    /// Whether the module is a build plugin marker artifact.
    pub fn is_plugin(&self) -> bool {
        self.module.ends_with(PLUGIN_MARKER_SUFFIX)
    }

    /// Whether this is the synthetic build-tool record.
    pub fn is_build_tool(&self) -> bool {
        self.group == BUILD_TOOL_GROUP && self.module == GRADLE_LATEST_VERSION
    }

    /// The candidate worth annotating, if it differs from the current version.
    pub fn newer_version(&self) -> Option<&str> {
        self.available
            .as_ref()
            .and_then(AvailableVersions::newest)
            .filter(|candidate| *candidate != self.version)
    }
}

/// How the version symbol of a dependency is keyed.
///
/// Variant order is significant: generated tables list grouped symbols first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionMode {
    /// One shared symbol keyed by the (virtual) group label
    Group,
    /// Symbol keyed by group and module
    GroupModule,
    /// Symbol keyed by the module name alone
    Module,
}

impl fmt::Display for VersionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => write!(f, "GROUP"),
            Self::GroupModule => write!(f, "GROUP_MODULE"),
            Self::Module => write!(f, "MODULE"),
        }
    }
}

/// A record together with its naming decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedDependency {
    #[serde(flatten)]
    pub record: DependencyRecord,
    /// Literal group, or the virtual group label claiming this record
    pub version_group: String,
    pub mode: VersionMode,
    /// Identifier in the version table
    pub symbol_name: String,
    /// Identifier in the library-coordinate table
    pub coordinate_symbol_name: String,
}

impl NamedDependency {
    /// New value with a different mode and version symbol.
    ///
    /// The coordinate symbol is carried over unchanged.
    #[must_use]
    pub fn remapped(&self, mode: VersionMode, symbol_name: String) -> Self {
        Self {
            mode,
            symbol_name,
            ..self.clone()
        }
    }

    /// Whether the version group comes from a virtual group rather than the literal group.
    pub fn in_virtual_group(&self) -> bool {
        self.version_group != self.record.group
    }
}
