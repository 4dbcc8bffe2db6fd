//! Naming resolution for depsym.
//!
//! This module turns a flat list of [`DependencyRecord`]s into a
//! [`ResolvedSet`]: every record carries a [`VersionMode`], a version symbol and
//! a coordinate symbol, no two unrelated records share a symbol, and the order
//! is deterministic.
//!
//! # Pipeline
//!
//! Resolution is a chain of owned stages. Each stage consumes the previous one
//! and builds new [`NamedDependency`] values; nothing is edited in place.
//!
//! ```text
//! Vec<DependencyRecord>
//!     │  dedupe + stability filter
//!     ▼
//! Vec<DependencyRecord>     (unresolved)
//!     │  ambiguity::disambiguate      MODULE or GROUP_MODULE per record
//!     ▼
//! Disambiguated
//!     │  Disambiguated::group         co-versioned partitions become GROUP
//!     ▼
//! Grouped
//!     │  Grouped::order               sort + uniqueness verification
//!     ▼
//! ResolvedSet
//! ```
//!
//! ## Disambiguation
//!
//! A record is keyed by its module name unless:
//! - its module is in the meaningless-names deny-list (`core`, `common`, ...),
//! - its module (or escaped module) is listed in `use-fqdn-for`,
//! - its group is listed in `use-fqdn-for` or the deny-list,
//! - its escaped module is shared with another record, or
//! - its module symbol collides with a symbol assigned to anyone else.
//!
//! The last rule is applied until nothing changes. See [`ambiguity`].
//!
//! ## Grouping
//!
//! Records are partitioned by their version group, which is the literal group
//! or the label of the [virtual group](virtual_groups) claiming them. A
//! partition whose members all share one version, and which is either virtual
//! or has several members, is moved onto one shared symbol. See [`grouping`].
//!
//! ## Verification
//!
//! After ordering, two records may share a version symbol only when both are
//! `GROUP` records of the same version group at the same version. Coordinate
//! symbols must be pairwise distinct. Anything else is an internal defect and
//! is reported as [`DepsymError::InvariantViolation`].
//!
//! # Example
//!
//! ```rust
//! use depsym_cli::models::{DependencyRecord, VersionMode};
//! use depsym_cli::resolver::{NamingConfig, resolve};
//!
//! let records = vec![
//!     DependencyRecord::new("com.example", "core", "1.0"),
//!     DependencyRecord::new("com.example", "widgets", "2.0"),
//! ];
//! let resolved = resolve(records, &NamingConfig::default())?;
//!
//! let symbols: Vec<&str> = resolved.iter().map(|d| d.symbol_name.as_str()).collect();
//! assert_eq!(symbols, vec!["com_example_core", "widgets"]);
//! assert_eq!(resolved.dependencies()[0].mode, VersionMode::GroupModule);
//! # Ok::<(), depsym_cli::core::DepsymError>(())
//! ```

pub mod ambiguity;
pub mod grouping;
pub mod ordering;
pub mod virtual_groups;

pub use virtual_groups::{VirtualGroup, VirtualGroupMember, VirtualGroupRegistry};

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::constants::MEANINGLESS_NAMES;
use crate::core::DepsymError;
use crate::models::{DependencyRecord, NamedDependency, VersionMode};
use crate::report::{DependencyGraph, flatten};
use crate::version::StabilityPolicy;

/// Immutable naming configuration threaded through one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    /// Names (or groups, when they contain a `.`) that always use group+module
    pub use_fqdn_for: Vec<String>,
    /// Module names too generic to stand alone
    pub meaningless_names: Vec<String>,
    pub virtual_groups: VirtualGroupRegistry,
    /// Filter applied to update candidates before annotation
    pub stability: StabilityPolicy,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            use_fqdn_for: Vec::new(),
            meaningless_names: MEANINGLESS_NAMES.iter().map(|name| (*name).to_string()).collect(),
            virtual_groups: VirtualGroupRegistry::builtin(),
            stability: StabilityPolicy::default(),
        }
    }
}

impl NamingConfig {
    #[must_use]
    pub fn with_use_fqdn_for<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_fqdn_for = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_meaningless_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meaningless_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_virtual_groups(mut self, registry: VirtualGroupRegistry) -> Self {
        self.virtual_groups = registry;
        self
    }

    #[must_use]
    pub fn with_stability(mut self, stability: StabilityPolicy) -> Self {
        self.stability = stability;
        self
    }
}

/// Records after disambiguation: every mode is `MODULE` or `GROUP_MODULE`.
#[derive(Debug, Clone)]
pub struct Disambiguated {
    dependencies: Vec<NamedDependency>,
    warnings: Vec<DepsymError>,
}

impl Disambiguated {
    pub(crate) fn new(dependencies: Vec<NamedDependency>, warnings: Vec<DepsymError>) -> Self {
        Self {
            dependencies,
            warnings,
        }
    }

    pub fn dependencies(&self) -> &[NamedDependency] {
        &self.dependencies
    }

    pub fn warnings(&self) -> &[DepsymError] {
        &self.warnings
    }

    pub(crate) fn into_parts(self) -> (Vec<NamedDependency>, Vec<DepsymError>) {
        (self.dependencies, self.warnings)
    }

    /// Run the version grouper.
    pub fn group(self) -> Grouped {
        grouping::group_versions(self)
    }
}

/// Records after version grouping, in input order.
#[derive(Debug, Clone)]
pub struct Grouped {
    dependencies: Vec<NamedDependency>,
    warnings: Vec<DepsymError>,
}

impl Grouped {
    pub(crate) fn new(dependencies: Vec<NamedDependency>, warnings: Vec<DepsymError>) -> Self {
        Self {
            dependencies,
            warnings,
        }
    }

    pub fn dependencies(&self) -> &[NamedDependency] {
        &self.dependencies
    }

    /// Sort into rendering order and verify symbol uniqueness.
    ///
    /// # Errors
    ///
    /// [`DepsymError::InvariantViolation`] when two unrelated records share a symbol.
    pub fn order(self) -> Result<ResolvedSet, DepsymError> {
        let dependencies = ordering::order(self.dependencies);
        verify_unique(&dependencies)?;
        Ok(ResolvedSet {
            dependencies,
            warnings: self.warnings,
        })
    }
}

/// Final, ordered, collision-free output of the pipeline.
#[derive(Debug, Clone)]
pub struct ResolvedSet {
    dependencies: Vec<NamedDependency>,
    warnings: Vec<DepsymError>,
}

impl ResolvedSet {
    pub fn dependencies(&self) -> &[NamedDependency] {
        &self.dependencies
    }

    /// Non-fatal configuration problems found on the way.
    pub fn warnings(&self) -> &[DepsymError] {
        &self.warnings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedDependency> {
        self.dependencies.iter()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// First dependency for each distinct version symbol, in order.
    pub fn distinct_versions(&self) -> impl Iterator<Item = &NamedDependency> {
        let mut seen = HashSet::new();
        self.dependencies.iter().filter(move |d| seen.insert(d.symbol_name.as_str()))
    }
}

impl<'a> IntoIterator for &'a ResolvedSet {
    type Item = &'a NamedDependency;
    type IntoIter = std::slice::Iter<'a, NamedDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.iter()
    }
}

/// Resolve names for `records`.
///
/// Exact duplicate coordinates are collapsed first. With
/// [`StabilityPolicy::RejectNonStable`] the non-stable update candidates are
/// dropped before naming; they never influence naming either way.
///
/// # Errors
///
/// [`DepsymError::InvariantViolation`] if a collision survives the pipeline.
pub fn resolve(records: Vec<DependencyRecord>, config: &NamingConfig) -> Result<ResolvedSet, DepsymError> {
    let records = apply_stability(ambiguity::dedupe(records), config.stability);
    let resolved = ambiguity::disambiguate(records, config).group().order()?;
    debug!("Resolved {} dependencies with {} warning(s)", resolved.len(), resolved.warnings().len());
    Ok(resolved)
}

/// Flatten `graph` and resolve it.
///
/// # Errors
///
/// [`DepsymError::MalformedGraph`] from flattening, or any error of [`resolve`].
pub fn resolve_graph(graph: &DependencyGraph, config: &NamingConfig) -> Result<ResolvedSet, DepsymError> {
    resolve(flatten(graph)?, config)
}

fn apply_stability(records: Vec<DependencyRecord>, policy: StabilityPolicy) -> Vec<DependencyRecord> {
    match policy {
        StabilityPolicy::AcceptAll => records,
        StabilityPolicy::RejectNonStable => records
            .into_iter()
            .map(|record| DependencyRecord {
                available: record.available.as_ref().and_then(|a| a.retain(|v| policy.accepts(v))),
                ..record
            })
            .collect(),
    }
}

fn verify_unique(dependencies: &[NamedDependency]) -> Result<(), DepsymError> {
    let mut by_symbol: BTreeMap<&str, Vec<&NamedDependency>> = BTreeMap::new();
    for dependency in dependencies {
        by_symbol.entry(dependency.symbol_name.as_str()).or_default().push(dependency);
    }
    for (symbol, owners) in &by_symbol {
        let first = owners[0];
        let shared = owners.iter().all(|d| {
            d.mode == VersionMode::Group
                && d.version_group == first.version_group
                && d.record.version == first.record.version
        });
        if owners.len() > 1 && !shared {
            return Err(violation(symbol, owners));
        }
    }

    let mut by_coordinate: BTreeMap<&str, Vec<&NamedDependency>> = BTreeMap::new();
    for dependency in dependencies {
        by_coordinate.entry(dependency.coordinate_symbol_name.as_str()).or_default().push(dependency);
    }
    match by_coordinate.iter().find(|(_, owners)| owners.len() > 1) {
        Some((symbol, owners)) => Err(violation(symbol, owners)),
        None => Ok(()),
    }
}

fn violation(symbol: &str, owners: &[&NamedDependency]) -> DepsymError {
    DepsymError::InvariantViolation {
        symbol: symbol.to_string(),
        owners: owners.iter().map(|d| d.record.coordinate()).collect::<Vec<_>>().join(", "),
    }
}
