//! Generate the `Versions` and `Libs` Kotlin objects.
//!
//! # Examples
//!
//! ```bash
//! # Use the report and buildSrc locations from depsym.toml (or the defaults)
//! depsym generate
//!
//! # Read another report, write somewhere else
//! depsym generate --report build/reports/deps.json --output build-logic
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use super::CliConfig;
use super::common::{CommandContext, print_warnings};
use crate::render::write_buildsrc;

/// Command to generate the Kotlin tables.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Dependency report to read (defaults to the configured report)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// buildSrc directory to write into (defaults to the configured one)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateCommand {
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let context = CommandContext::load(cli).await?;
        let resolved = context.resolve(self.report.as_deref()).await?;
        print_warnings(resolved.warnings());

        let buildsrc = self.output.unwrap_or_else(|| context.config.buildsrc_path(&context.project_dir));
        debug!("Generating {} dependencies into {}", resolved.len(), buildsrc.display());

        let generated = write_buildsrc(&buildsrc, &resolved, &context.config.kotlin_options())?;

        for path in &generated.sources {
            context.status(format!("{} Generated {}", "✓".green(), path.display()));
        }
        for path in &generated.scaffolding {
            context.status(format!("{} Created {}", "✓".green(), path.display()));
        }
        context.status(format!(
            "\n{} {} dependencies, {} version symbols",
            "Done:".green().bold(),
            resolved.len(),
            resolved.distinct_versions().count()
        ));

        Ok(())
    }
}
