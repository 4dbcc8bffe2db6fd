//! depsym - conflict-free dependency symbols for Gradle builds
//!
//! depsym reads the JSON report of the Gradle dependency-updates task and
//! gives every dependency a short, valid and unique identifier. The result is
//! written either as Kotlin `Versions`/`Libs` objects in `buildSrc` or as
//! `version.*` keys merged into `gradle.properties`.
//!
//! # Architecture Overview
//!
//! ```text
//! report.json ─► report::flatten ─► resolver::resolve ─┬─► render (Versions.kt, Libs.kt)
//!                                                      └─► properties (gradle.properties)
//! ```
//!
//! The resolver is a pipeline of pure passes over immutable values:
//!
//! 1. Duplicate coordinates are collapsed.
//! 2. Every record gets a module-only symbol, or a group+module symbol when the
//!    module name is generic, configured, or ambiguous.
//! 3. Records of one (virtual) group sharing a version are promoted to one
//!    group-level version symbol.
//! 4. The set is ordered deterministically and checked for uniqueness.
//!
//! # Core Modules
//!
//! - [`report`] - Report model, loader and flattener
//! - [`naming`] - Identifier escaping and symbol derivation
//! - [`resolver`] - Virtual groups, ambiguity resolution, version grouping, ordering
//! - [`render`] - Kotlin `buildSrc` generation
//! - [`properties`] - `gradle.properties` block generation and merge
//!
//! ## Supporting Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - `depsym.toml` loading and validation
//! - [`core`] - Error types and user-facing error formatting
//! - [`models`] - Records and naming decisions shared by every stage
//! - [`version`] - Stable/non-stable version classification
//! - [`utils`] - File helpers
//! - [`constants`] - Defaults, markers and built-in naming tables
//!
//! # Example
//!
//! ```rust
//! use depsym_cli::models::{DependencyRecord, VersionMode};
//! use depsym_cli::resolver::{NamingConfig, resolve};
//!
//! let resolved = resolve(
//!     vec![
//!         DependencyRecord::new("com.squareup.okhttp3", "okhttp", "4.2.2"),
//!         DependencyRecord::new("androidx.core", "core", "1.1.0"),
//!     ],
//!     &NamingConfig::default(),
//! )?;
//!
//! let names: Vec<&str> = resolved.iter().map(|d| d.symbol_name.as_str()).collect();
//! assert_eq!(names, vec!["androidx_core_core", "okhttp"]);
//! assert_eq!(resolved.dependencies()[0].mode, VersionMode::GroupModule);
//! # Ok::<(), depsym_cli::core::DepsymError>(())
//! ```

// Core functionality modules
pub mod cli;
pub mod config;
pub mod core;
pub mod resolver;

// Pipeline stages
pub mod naming;
pub mod properties;
pub mod render;
pub mod report;

// Supporting modules
pub mod constants;
pub mod models;
pub mod utils;
pub mod version;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
