//! Command-line interface for depsym.
//!
//! depsym reads the JSON report of the Gradle dependency-updates task and
//! turns it into conflict-free version and library constants. Each command
//! lives in its own module with its own argument struct and `execute` method.
//!
//! # Available Commands
//!
//! - `generate` - Write `Versions.kt` and `Libs.kt` into `buildSrc`
//! - `properties` - Merge `version.*` and `plugin.*` keys into `gradle.properties`
//! - `list` - Show the naming decision for every dependency
//!
//! # Usage
//!
//! ```bash
//! # 1. Produce the report
//! ./gradlew dependencyUpdates -DoutputFormatter=json
//!
//! # 2. Generate the Kotlin tables
//! depsym generate
//!
//! # 3. Or keep versions in gradle.properties instead
//! depsym properties
//!
//! # Inspect naming decisions
//! depsym list --format json
//! ```
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Errors only, no status output
//! - `--config` / `-c` - Use this file instead of `<project-dir>/depsym.toml`
//! - `--project-dir` - Project root (defaults to the current directory)
//!
//! Logging goes to stderr and honors `RUST_LOG`, so stdout stays parseable
//! for `list --format json`. Log colors are off when stderr is not a
//! terminal or `NO_COLOR` is set.

pub mod common;
mod generate;
mod list;
mod properties;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Settings derived from the global flags, shared by every command.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Default log level when `RUST_LOG` is unset
    pub log_level: LevelFilter,
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
    /// Project root
    pub project_dir: Option<PathBuf>,
    /// Suppress status output
    pub quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::WARN,
            config_path: None,
            project_dir: None,
            quiet: false,
        }
    }
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// Logs go to stderr. `RUST_LOG` overrides the level chosen by the flags.
    /// A second call is a no-op.
    pub fn init_logging(&self) {
        let filter = EnvFilter::builder()
            .with_default_directive(self.log_level.into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(ansi_enabled(std::io::stderr().is_terminal(), std::env::var_os("NO_COLOR").as_deref()))
            .try_init();
    }
}

/// Colored log output only on a terminal, and never when `NO_COLOR` is set to a non-empty value.
fn ansi_enabled(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    is_terminal && no_color.is_none_or(OsStr::is_empty)
}

/// Main CLI structure for depsym.
#[derive(Parser, Debug)]
#[command(
    name = "depsym",
    about = "Generate conflict-free version and library constants from a dependency update report",
    version,
    author,
    long_about = "depsym names every dependency of a Gradle dependency-updates report, groups \
                  versions that move together, and writes the result as buildSrc Kotlin \
                  objects or gradle.properties keys."
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to depsym.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project root holding the report and the generated files
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Versions.kt and Libs.kt in buildSrc
    Generate(generate::GenerateCommand),

    /// Merge versions into gradle.properties
    Properties(properties::PropertiesCommand),

    /// List dependencies with their generated names
    List(list::ListCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            LevelFilter::DEBUG
        } else if self.quiet {
            LevelFilter::ERROR
        } else {
            LevelFilter::WARN
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            project_dir: self.project_dir.clone(),
            quiet: self.quiet,
        }
    }

    /// Execute with an explicit configuration. Does not touch logging.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(&config).await,
            Commands::Properties(cmd) => cmd.execute(&config).await,
            Commands::List(cmd) => cmd.execute(&config).await,
        }
    }
}
