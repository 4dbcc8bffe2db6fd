//! Merge the generated version block into `gradle.properties`.
//!
//! Lines owned by depsym (`version.*`, `plugin.*`, update comments and the
//! block header) are replaced; everything else in the file is kept in order.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use super::common::{CommandContext, print_warnings};
use crate::constants::PROPERTIES_HEADER;
use crate::properties::update_properties;

/// Command to update `gradle.properties`.
#[derive(Args, Debug)]
pub struct PropertiesCommand {
    /// Dependency report to read (defaults to the configured report)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Properties file to update (defaults to the configured one)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl PropertiesCommand {
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let context = CommandContext::load(cli).await?;
        let resolved = context.resolve(self.report.as_deref()).await?;
        print_warnings(resolved.warnings());

        let path = self.file.unwrap_or_else(|| context.config.properties_path(&context.project_dir));
        let written = update_properties(&path, &resolved)?;

        context.status(format!(
            "{} Updated {} ({} generated lines)",
            "✓".green(),
            path.display(),
            written.saturating_sub(PROPERTIES_HEADER.len())
        ));
        Ok(())
    }
}
