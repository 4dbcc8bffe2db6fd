//! depsym CLI entry point
//!
//! Parses the command line, runs the selected command and turns failures
//! into a user-friendly message with exit code 1.
//!
//! - `generate` - Write the `Versions` and `Libs` Kotlin objects into buildSrc
//! - `properties` - Merge version keys into gradle.properties
//! - `list` - Show the generated names of every dependency

use anyhow::Result;
use clap::Parser;
use depsym_cli::cli;
use depsym_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
