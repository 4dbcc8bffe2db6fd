//! Test utilities for depsym
//!
//! Helpers shared by unit tests, the `unit` suite and the `integration`
//! suite: report fixtures, project layout and test logging.
//!
//! # Example
//!
//! ```rust,no_run
//! use depsym_cli::test_utils::{SAMPLE_REPORT, write_project};
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! write_project(temp.path(), SAMPLE_REPORT, Some("use-fqdn-for = [\"okhttp\"]"));
//! assert!(temp.path().join("depsym.toml").exists());
//! ```

pub mod fixtures;

pub use fixtures::{ReportBuilder, SAMPLE_REPORT, write_project};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=depsym_cli::resolver=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
