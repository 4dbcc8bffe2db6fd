//! Integration test suite for depsym
//!
//! End-to-end tests that run the `depsym` binary against a temporary
//! project directory.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: buildSrc generation
//! - **properties**: gradle.properties merging
//! - **list**: Table and JSON listing
//! - **error_scenarios**: Exit codes and messages for bad input

use assert_cmd::Command;
use std::path::Path;

mod error_scenarios;
mod generate;
mod list;
mod properties;

/// `depsym` command rooted at `project_dir`, without colors.
pub fn depsym(project_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("depsym").unwrap();
    cmd.arg("--project-dir").arg(project_dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}
