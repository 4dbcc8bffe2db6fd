//! Identifier escaping and symbol derivation
//!
//! Every generated name goes through [`escape_identifier`]. The escaping is
//! deliberately lossy (`a.b` and `a-b` both become `a_b`), so it never decides
//! uniqueness on its own; the resolver does.
//!
//! ```rust
//! use depsym_cli::naming::escape_identifier;
//!
//! assert_eq!(
//!     escape_identifier("org.jetbrains.kotlinx:kotlinx-coroutines-core"),
//!     "org_jetbrains_kotlinx_kotlinx_coroutines_core"
//! );
//! ```

use crate::models::{DependencyRecord, VersionMode};

/// Characters replaced by `_` in generated identifiers.
const ESCAPED_CHARS: [char; 3] = ['-', '.', ':'];

/// Turn a coordinate string into a lowercase identifier.
///
/// `-`, `.` and `:` become `_`; every other character is lower-cased and kept.
pub fn escape_identifier(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('_');
        } else {
            escaped.extend(c.to_lowercase());
        }
    }
    escaped
}

/// Unescaped key a record's version symbol is derived from.
pub fn symbol_source(record: &DependencyRecord, mode: VersionMode, version_group: &str) -> String {
    match mode {
        VersionMode::Module => record.module.clone(),
        VersionMode::Group => version_group.to_string(),
        VersionMode::GroupModule => format!("{}_{}", record.group, record.module),
    }
}

/// Escaped version-table symbol for `record` under `mode`.
pub fn version_symbol(record: &DependencyRecord, mode: VersionMode, version_group: &str) -> String {
    escape_identifier(&symbol_source(record, mode, version_group))
}

/// Escaped coordinate-table symbol.
///
/// Only the module or group+module forms apply; a grouped version symbol never
/// changes the coordinate symbol.
pub fn coordinate_symbol(record: &DependencyRecord, use_group: bool) -> String {
    if use_group {
        escape_identifier(&format!("{}_{}", record.group, record.module))
    } else {
        escape_identifier(&record.module)
    }
}
