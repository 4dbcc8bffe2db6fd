//! Promotion of co-versioned partitions onto one shared version symbol.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::{Disambiguated, Grouped};
use crate::models::{NamedDependency, VersionMode};
use crate::naming::escape_identifier;

/// Promote every eligible partition to `GROUP`.
///
/// Records are partitioned by version group. A partition is eligible when all
/// of its members share one version string and it is either claimed by a
/// virtual group or has more than one member. Its members then share the
/// escaped label as version symbol, unless that symbol is already held by a
/// record outside the partition, in which case the partition is left alone.
///
/// Partitions are visited in label order. Coordinate symbols never change.
/// The build-tool record belongs to no partition and keeps its own symbol.
pub fn group_versions(stage: Disambiguated) -> Grouped {
    let (dependencies, warnings) = stage.into_parts();

    let mut partitions: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, dependency) in dependencies.iter().enumerate() {
        if dependency.record.is_build_tool() {
            continue;
        }
        partitions.entry(dependency.version_group.as_str()).or_default().push(index);
    }

    let mut promoted: HashMap<usize, String> = HashMap::new();
    for (label, members) in &partitions {
        if !is_eligible(&dependencies, members) {
            continue;
        }

        let symbol = escape_identifier(label);
        let taken = dependencies.iter().enumerate().any(|(index, dependency)| {
            !members.contains(&index)
                && promoted.get(&index).map_or(dependency.symbol_name.as_str(), String::as_str) == symbol
        });
        if taken {
            debug!("Not grouping '{label}': symbol '{symbol}' is already in use");
            continue;
        }

        debug!("Grouping {} dependencies under '{symbol}'", members.len());
        for index in members {
            promoted.insert(*index, symbol.clone());
        }
    }

    let grouped = dependencies
        .iter()
        .enumerate()
        .map(|(index, dependency)| match promoted.get(&index) {
            Some(symbol) => dependency.remapped(VersionMode::Group, symbol.clone()),
            None => dependency.clone(),
        })
        .collect();

    Grouped::new(grouped, warnings)
}

fn is_eligible(dependencies: &[NamedDependency], members: &[usize]) -> bool {
    let Some(first) = members.first().map(|index| &dependencies[*index]) else {
        return false;
    };
    let same_version = members.iter().all(|index| dependencies[*index].record.version == first.record.version);
    let virtual_group = members.iter().any(|index| dependencies[*index].in_virtual_group());

    same_version && (virtual_group || members.len() > 1)
}
