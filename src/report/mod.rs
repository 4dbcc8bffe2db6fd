//! Dependency report input
//!
//! depsym consumes the JSON report written by the Gradle dependency-updates
//! task. This module owns its serde model ([`model`]), the loader, and the
//! flattener that turns the sectioned report into a single list of
//! [`DependencyRecord`](crate::models::DependencyRecord)s.
//!
//! # Report format
//!
//! ```json
//! {
//!   "current":    { "dependencies": [ { "group": "com.google.guava", "name": "guava", "version": "28.1-jre" } ] },
//!   "exceeded":   { "dependencies": [] },
//!   "outdated":   { "dependencies": [ { "group": "com.squareup.okhttp3", "name": "okhttp", "version": "3.12.1",
//!                                      "available": { "release": "4.2.2", "milestone": null, "integration": null } } ] },
//!   "unresolved": { "dependencies": [] },
//!   "gradle": { "running": { "version": "5.6.2" }, "current": { "version": "6.0.1" } }
//! }
//! ```

pub mod flatten;
pub mod model;

pub use flatten::{build_tool_record, flatten};
pub use model::{BuildToolVersions, DependencyGraph, Observation, Section, ToolVersion};

use std::path::Path;

use crate::core::DepsymError;

/// Load and parse a report from disk.
///
/// # Errors
///
/// - [`DepsymError::ReportNotFound`] when the file does not exist
/// - [`DepsymError::ReportParseError`] when it is not a valid report
/// - [`DepsymError::IoError`] for other read failures
pub async fn load_report(path: &Path) -> Result<DependencyGraph, DepsymError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DepsymError::ReportNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    parse_report(&content).map_err(|e| DepsymError::ReportParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parse report JSON held in memory.
pub fn parse_report(content: &str) -> Result<DependencyGraph, serde_json::Error> {
    serde_json::from_str(content)
}
