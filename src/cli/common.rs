//! Common utilities for CLI commands

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::CliConfig;
use crate::config::ProjectConfig;
use crate::core::{DepsymError, create_error_context};
use crate::report::load_report;
use crate::resolver::{ResolvedSet, resolve_graph};

/// Common context for CLI commands: project directory plus its configuration
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory the relative paths of `depsym.toml` are resolved against
    pub project_dir: PathBuf,
    /// Parsed `depsym.toml`, or defaults
    pub config: ProjectConfig,
    /// Suppress status output
    pub quiet: bool,
}

impl CommandContext {
    /// Load the project configuration selected by the global CLI options.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined or the
    /// configuration file exists but is invalid
    pub async fn load(cli: &CliConfig) -> Result<Self> {
        let project_dir = match &cli.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine the current directory")?,
        };

        let config = match &cli.config_path {
            Some(path) => ProjectConfig::load_from(path).await?,
            None => ProjectConfig::load_or_default(&ProjectConfig::default_path(&project_dir)).await?,
        };

        Ok(Self {
            project_dir,
            config,
            quiet: cli.quiet,
        })
    }

    /// Report path: `report` when given, the configured one otherwise.
    pub fn report_path(&self, report: Option<&Path>) -> PathBuf {
        report.map_or_else(|| self.config.report_path(&self.project_dir), Path::to_path_buf)
    }

    /// Load the report and run the naming pipeline on it.
    ///
    /// # Errors
    /// Returns an error if the report is missing, malformed, or naming fails
    pub async fn resolve(&self, report: Option<&Path>) -> Result<ResolvedSet> {
        let report_path = self.report_path(report);
        debug!("Reading dependency report {}", report_path.display());

        let graph = load_report(&report_path).await?;
        let resolved = resolve_graph(&graph, &self.config.naming_config())
            .with_context(|| format!("Failed to name the dependencies of {}", report_path.display()))?;

        Ok(resolved)
    }

    /// Print a status line unless quiet.
    pub fn status(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

/// Print configuration warnings to stderr.
pub fn print_warnings(warnings: &[DepsymError]) {
    for warning in warnings {
        let context = create_error_context(warning);
        eprintln!("{} {}", "warning:".yellow().bold(), context.error);
        if let Some(suggestion) = &context.suggestion {
            eprintln!("  {} {}", "suggestion:".green(), suggestion);
        }
    }
}
