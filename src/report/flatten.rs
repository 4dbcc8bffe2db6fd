//! Flattening of the report into one list of dependency records.

use tracing::debug;

use super::model::{BuildToolVersions, DependencyGraph, Observation};
use crate::constants::{BUILD_TOOL_GROUP, GRADLE_LATEST_VERSION, NO_VERSION};
use crate::core::DepsymError;
use crate::models::{AvailableVersions, DependencyRecord};

/// Merge every report section, then the build-tool pseudo-dependency, into one list.
///
/// Order is current, exceeded, outdated, unresolved, build tool. Duplicate
/// coordinates are kept; the resolver decides what to do with them.
///
/// # Errors
///
/// [`DepsymError::MalformedGraph`] when an entry has no group or no name.
pub fn flatten(graph: &DependencyGraph) -> Result<Vec<DependencyRecord>, DepsymError> {
    let mut records = Vec::new();

    for (section, observations) in graph.sections() {
        for (index, observation) in observations.dependencies.iter().enumerate() {
            records.push(to_record(section, index, observation)?);
        }
    }

    match build_tool_record(&graph.gradle) {
        Some(record) => records.push(record),
        None => debug!("Report has no running build tool version, skipping {GRADLE_LATEST_VERSION}"),
    }

    debug!("Flattened report into {} records", records.len());
    Ok(records)
}

fn to_record(section: &str, index: usize, observation: &Observation) -> Result<DependencyRecord, DepsymError> {
    let malformed = |reason: &str| DepsymError::MalformedGraph {
        section: section.to_string(),
        index,
        reason: reason.to_string(),
    };

    let group = non_blank(observation.group.as_deref()).ok_or_else(|| malformed("has no group"))?;
    let module = non_blank(observation.name.as_deref()).ok_or_else(|| malformed("has no name"))?;
    let version = non_blank(observation.version.as_deref()).unwrap_or(NO_VERSION);

    Ok(DependencyRecord {
        group: group.to_string(),
        module: module.to_string(),
        version: version.to_string(),
        available: observation.available.clone(),
        project_url: observation.project_url.clone(),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Synthetic record tracking the build tool itself.
///
/// The latest-known version becomes a release candidate only when it differs
/// from the running one.
pub fn build_tool_record(versions: &BuildToolVersions) -> Option<DependencyRecord> {
    let running = non_blank(Some(versions.running.version.as_str()))?;
    let record = DependencyRecord::new(BUILD_TOOL_GROUP, GRADLE_LATEST_VERSION, running);

    match non_blank(Some(versions.current.version.as_str())) {
        Some(latest) if latest != running => Some(record.with_available(AvailableVersions::release(latest))),
        _ => Some(record),
    }
}
