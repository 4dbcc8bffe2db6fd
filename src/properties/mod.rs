//! `gradle.properties` version block.
//!
//! [`lines`] renders one `version.<key>=<version>` (or `plugin.<id>=<version>`)
//! line per distinct property, each optionally followed by an update comment.
//! [`merge`] splices that block into the existing file so that hand-written
//! lines survive every regeneration.
//!
//! ```text
//! org.gradle.jvmargs=-Xmx2g                     <- kept
//! # Dependencies and Plugin versions with their available updates
//! # Generated by $ depsym properties
//! # You can edit the rest of the file, it will be kept intact
//! plugin.org.jetbrains.kotlin.jvm=1.3.50
//! version.okhttp=3.12.1
//! #  # available=4.2.2
//! ```

pub mod lines;
pub mod merge;

pub use lines::{generated_lines, property_key, property_name};
pub use merge::{is_generated_line, merge_into_file, merge_lines};

use std::path::Path;

use crate::core::DepsymError;
use crate::resolver::ResolvedSet;

/// Render the block for `resolved` and merge it into `path`.
///
/// Returns the number of generated lines written, header included.
///
/// # Errors
///
/// [`DepsymError::FileUnwritable`] when the file cannot be read or replaced.
pub fn update_properties(path: &Path, resolved: &ResolvedSet) -> Result<usize, DepsymError> {
    let lines = generated_lines(resolved);
    merge_into_file(path, &lines)?;
    Ok(lines.len())
}
