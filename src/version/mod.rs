//! Version stability classification
//!
//! depsym never compares versions. The only question it asks of a version
//! string is whether it looks like a stable release, so that pre-release
//! candidates can be left out of update annotations on request.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Keywords marking a version as a final release regardless of its shape.
const STABLE_KEYWORDS: &[&str] = &["RELEASE", "FINAL", "GA"];

fn stable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9,.v-]+$").expect("static regex is valid"))
}

/// Whether `version` looks like a pre-release (alpha, beta, rc, milestone, snapshot, ...).
///
/// ```rust
/// use depsym_cli::version::is_non_stable;
///
/// assert!(!is_non_stable("1.3.50"));
/// assert!(!is_non_stable("5.2.0.RELEASE"));
/// assert!(is_non_stable("1.4-M1"));
/// assert!(is_non_stable("2.0.0-rc01"));
/// ```
pub fn is_non_stable(version: &str) -> bool {
    let upper = version.to_uppercase();
    let has_stable_keyword = STABLE_KEYWORDS.iter().any(|keyword| upper.contains(keyword));
    !(has_stable_keyword || stable_pattern().is_match(version))
}

/// Which update candidates are worth annotating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StabilityPolicy {
    /// Annotate every candidate the report offers
    #[default]
    AcceptAll,
    /// Drop candidates classified by [`is_non_stable`]
    RejectNonStable,
}

impl StabilityPolicy {
    pub fn accepts(self, version: &str) -> bool {
        match self {
            Self::AcceptAll => true,
            Self::RejectNonStable => !is_non_stable(version),
        }
    }
}
