//! Module-versus-group+module naming decision.
//!
//! Every record starts out keyed by its module name. A record switches to the
//! group+module form when its module (or escaped module) is in the
//! group+module set, which is seeded from:
//!
//! 1. the `use-fqdn-for` overrides,
//! 2. the meaningless-names deny-list,
//! 3. modules of any group named by an entry of (1) or (2) containing a `.`,
//! 4. escaped module names shared by more than one record.
//!
//! The set is then grown until no record keyed by module collides with any
//! other symbol. The set only grows, so the loop terminates after at most one
//! pass per distinct module.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use strsim::levenshtein;
use tracing::{debug, warn};

use super::{Disambiguated, NamingConfig};
use crate::core::DepsymError;
use crate::models::{DependencyRecord, NamedDependency, VersionMode};
use crate::naming::{coordinate_symbol, escape_identifier, version_symbol};

/// Maximum edit distance, as a percentage of the entry length, for a "did you mean" hint.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Drop repeated `group:module` coordinates, keeping the first occurrence.
pub fn dedupe(records: Vec<DependencyRecord>) -> Vec<DependencyRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let first = seen.insert(record.coordinate());
            if !first {
                debug!("Dropping duplicate coordinate {}", record.coordinate());
            }
            first
        })
        .collect()
}

/// Assign `MODULE` or `GROUP_MODULE` to every record.
///
/// `records` must not contain duplicate coordinates; see [`dedupe`].
pub fn disambiguate(records: Vec<DependencyRecord>, config: &NamingConfig) -> Disambiguated {
    let warnings = stale_overrides(&records, &config.use_fqdn_for);
    let mut use_fqdn = group_module_names(&records, config);

    let mut pass = 1;
    loop {
        let named: Vec<NamedDependency> =
            records.iter().map(|record| name_record(record, &use_fqdn, config)).collect();

        let before = use_fqdn.len();
        use_fqdn.extend(colliding_modules(&named));
        if use_fqdn.len() == before {
            debug!("Naming settled after {pass} pass(es), {} group+module names", use_fqdn.len());
            return Disambiguated::new(named, warnings);
        }
        pass += 1;
    }
}

/// Initial group+module set for `records`.
pub fn group_module_names(records: &[DependencyRecord], config: &NamingConfig) -> BTreeSet<String> {
    let (groups, names): (Vec<&String>, Vec<&String>) = config
        .use_fqdn_for
        .iter()
        .chain(&config.meaningless_names)
        .partition(|entry| entry.contains('.'));

    let mut set: BTreeSet<String> = names.into_iter().cloned().collect();

    set.extend(
        records
            .iter()
            .filter(|record| groups.iter().any(|group| **group == record.group))
            .map(|record| record.module.clone()),
    );

    let mut holders: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *holders.entry(escape_identifier(&record.module)).or_default() += 1;
    }
    set.extend(holders.into_iter().filter(|(_, count)| *count > 1).map(|(name, _)| name));

    set
}

fn name_record(record: &DependencyRecord, use_fqdn: &BTreeSet<String>, config: &NamingConfig) -> NamedDependency {
    let mode = if use_fqdn.contains(&record.module) || use_fqdn.contains(&escape_identifier(&record.module)) {
        VersionMode::GroupModule
    } else {
        VersionMode::Module
    };
    let version_group = config.virtual_groups.group_or_virtual_group(record).to_string();

    NamedDependency {
        symbol_name: version_symbol(record, mode, &version_group),
        coordinate_symbol_name: coordinate_symbol(record, mode == VersionMode::GroupModule),
        version_group,
        mode,
        record: record.clone(),
    }
}

/// Escaped modules of `MODULE` records whose symbol is held by someone else too.
fn colliding_modules(named: &[NamedDependency]) -> Vec<String> {
    let mut holders: HashMap<&str, usize> = HashMap::new();
    for dependency in named {
        *holders.entry(dependency.symbol_name.as_str()).or_default() += 1;
    }

    named
        .iter()
        .filter(|dependency| {
            dependency.mode == VersionMode::Module && holders[dependency.symbol_name.as_str()] > 1
        })
        .map(|dependency| {
            debug!("'{}' collides, switching {} to group+module", dependency.symbol_name, dependency.record.coordinate());
            escape_identifier(&dependency.record.module)
        })
        .collect()
}

fn matches_override(record: &DependencyRecord, entry: &str) -> bool {
    if entry.contains('.') {
        record.group == entry
    } else {
        record.module == entry || escape_identifier(&record.module) == entry
    }
}

/// One warning per override entry matching no record.
fn stale_overrides(records: &[DependencyRecord], overrides: &[String]) -> Vec<DepsymError> {
    overrides
        .iter()
        .filter(|entry| !records.iter().any(|record| matches_override(record, entry)))
        .map(|entry| {
            let suggestion = closest_name(entry, records);
            warn!("use-fqdn-for entry '{entry}' does not match any dependency");
            DepsymError::AmbiguousConfiguration {
                name: entry.clone(),
                suggestion,
            }
        })
        .collect()
}

fn closest_name(entry: &str, records: &[DependencyRecord]) -> Option<String> {
    let candidates: BTreeSet<&str> =
        records.iter().flat_map(|record| [record.module.as_str(), record.group.as_str()]).collect();

    candidates
        .into_iter()
        .map(|candidate| (candidate, levenshtein(entry, candidate)))
        .filter(|(_, distance)| *distance <= entry.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate.to_string())
}
