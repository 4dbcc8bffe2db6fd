//! Splicing of the generated block into a user-edited properties file.
//!
//! A line is generator-owned when it starts with `version.` or `plugin.`,
//! contains `# available=`, or equals one of the header lines (current or
//! legacy). Every other line belongs to the user and is kept in place.

use std::path::Path;

use tracing::debug;

use crate::constants::{AVAILABLE_MARKER, GENERATED_LINE_PREFIXES, LEGACY_PROPERTIES_LINES, PROPERTIES_HEADER};
use crate::core::DepsymError;
use crate::utils::{atomic_write, read_optional_text};

/// Whether `line` was produced by a previous run.
pub fn is_generated_line(line: &str) -> bool {
    GENERATED_LINE_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        || line.contains(AVAILABLE_MARKER)
        || PROPERTIES_HEADER.contains(&line)
        || LEGACY_PROPERTIES_LINES.contains(&line)
}

/// Merge `generated` into `existing` text.
///
/// User lines keep their relative order; the generated block is appended
/// after them. Lines are joined with `\n` and no trailing newline is added.
pub fn merge_lines(existing: &str, generated: &[String]) -> String {
    existing
        .lines()
        .filter(|line| !is_generated_line(line))
        .chain(generated.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Merge `generated` into the file at `path`, creating it when absent.
///
/// # Errors
///
/// [`DepsymError::FileUnwritable`] when the file cannot be read or replaced.
/// The file is left untouched when reading fails.
pub fn merge_into_file(path: &Path, generated: &[String]) -> Result<(), DepsymError> {
    let unwritable = |reason: String| DepsymError::FileUnwritable {
        path: path.display().to_string(),
        reason,
    };

    let existing = read_optional_text(path).map_err(|e| unwritable(e.to_string()))?;
    if existing.is_none() {
        debug!("{} does not exist yet, creating it", path.display());
    }

    let merged = merge_lines(existing.as_deref().unwrap_or_default(), generated);
    atomic_write(path, merged.as_bytes()).map_err(|e| unwritable(format!("{e:#}")))?;

    debug!("Wrote {} generated lines to {}", generated.len(), path.display());
    Ok(())
}
