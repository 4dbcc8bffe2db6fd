//! Show the naming decision made for every dependency.
//!
//! The table lists each coordinate with its mode, version symbol and
//! coordinate symbol, in resolved order. `--format json` prints the same data
//! (plus configuration warnings) for scripts.
//!
//! # Examples
//!
//! ```bash
//! depsym list
//! depsym list --format json | jq '.dependencies[] | select(.mode == "GROUP")'
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::CliConfig;
use super::common::{CommandContext, print_warnings};
use crate::models::{NamedDependency, VersionMode};
use crate::resolver::ResolvedSet;

/// Command to list resolved dependencies.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Dependency report to read (defaults to the configured report)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    format: String,
}

/// Aggregate numbers printed under the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub total: usize,
    pub version_symbols: usize,
    pub grouped: usize,
    pub with_updates: usize,
}

impl ListSummary {
    fn of(resolved: &ResolvedSet) -> Self {
        Self {
            total: resolved.len(),
            version_symbols: resolved.distinct_versions().count(),
            grouped: resolved.iter().filter(|d| d.mode == VersionMode::Group).count(),
            with_updates: resolved.iter().filter(|d| d.record.newer_version().is_some()).count(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ListResult<'a> {
    dependencies: &'a [NamedDependency],
    summary: ListSummary,
    warnings: Vec<String>,
}

impl ListCommand {
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let context = CommandContext::load(cli).await?;
        let resolved = context.resolve(self.report.as_deref()).await?;

        match self.format.as_str() {
            "json" => display_json(&resolved),
            _ => {
                display_table(&resolved);
                print_warnings(resolved.warnings());
                Ok(())
            }
        }
    }
}

fn display_json(resolved: &ResolvedSet) -> Result<()> {
    let result = ListResult {
        dependencies: resolved.dependencies(),
        summary: ListSummary::of(resolved),
        warnings: resolved.warnings().iter().map(ToString::to_string).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn display_table(resolved: &ResolvedSet) {
    if resolved.is_empty() {
        println!("{}", "No dependencies in the report.".yellow());
        return;
    }

    println!(
        "\n{:<45} {:<14} {:<13} {:<30} {:<30}",
        "Dependency".bold(),
        "Version".bold(),
        "Mode".bold(),
        "Version symbol".bold(),
        "Library symbol".bold()
    );
    println!("{}", "─".repeat(136));

    for dependency in resolved {
        let record = &dependency.record;
        let coordinate = if record.newer_version().is_some() {
            record.coordinate().yellow()
        } else {
            record.coordinate().normal()
        };
        let mode = match dependency.mode {
            VersionMode::Group => dependency.mode.to_string().cyan(),
            VersionMode::GroupModule => dependency.mode.to_string().magenta(),
            VersionMode::Module => dependency.mode.to_string().normal(),
        };

        println!(
            "{:<45} {:<14} {:<13} {:<30} {:<30}",
            coordinate,
            record.version,
            mode,
            dependency.symbol_name,
            dependency.coordinate_symbol_name.bright_black()
        );
        if let Some(newer) = record.newer_version() {
            println!("{:<45} {} {}", "", "available:".bright_black(), newer.green());
        }
    }

    let summary = ListSummary::of(resolved);
    println!("\n{}", "Summary:".bold());
    println!("  Total dependencies: {}", summary.total);
    println!("  Version symbols: {}", summary.version_symbols);
    if summary.grouped > 0 {
        println!("  {} dependencies share a group version", summary.grouped.to_string().cyan());
    }
    if summary.with_updates > 0 {
        println!("  {} dependencies have updates available", summary.with_updates.to_string().yellow());
    }
}
