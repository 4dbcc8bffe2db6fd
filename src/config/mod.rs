//! Configuration management for depsym
//!
//! depsym reads a single optional project file, `depsym.toml`, next to the
//! Gradle build. A missing file means "all defaults". The loaded
//! [`ProjectConfig`] is turned into immutable values for each stage:
//! [`NamingConfig`](crate::resolver::NamingConfig) for the resolver and
//! [`KotlinOptions`](crate::render::KotlinOptions) for the Kotlin renderer.
//!
//! # Modules
//!
//! - `parser` - Generic TOML parsing utilities with error context
//! - `project` - The `depsym.toml` schema and its conversions
//!
//! # Example
//!
//! ```toml
//! # Dependency report written by `./gradlew dependencyUpdates -DoutputFormatter=json`
//! report = "build/dependencyUpdates/report.json"
//!
//! libs-name = "Libs"
//! versions-name = "Versions"
//! indent = "    "
//! order-by = "group-and-length"        # or "group-and-alphabetical"
//!
//! # Always use group+module for these modules, or for every module of these groups
//! use-fqdn-for = ["okhttp", "com.google.firebase"]
//!
//! # Replace the built-in list of names too generic to stand alone
//! meaningless-names = ["core", "common", "runtime"]
//!
//! # Leave alpha/beta/rc candidates out of update comments
//! reject-non-stable = true
//!
//! properties-file = "gradle.properties"
//! buildsrc-dir = "buildSrc"
//!
//! # Replace the built-in virtual groups
//! [[virtual-groups]]
//! label = "androidx.lifecycle"
//! members = [
//!     { group = "androidx.lifecycle" },
//!     { group = "android.arch.lifecycle" },
//! ]
//! ```

pub mod parser;
pub mod project;

pub use parser::{parse_config, parse_config_str};
pub use project::ProjectConfig;
