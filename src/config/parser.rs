//! Generic TOML parsing with file context.
//!
//! Read and parse failures are reported with the path of the offending file:
//!
//! ```text
//! Failed to parse config file: /path/to/depsym.toml
//! Caused by:
//!     unknown field `order`, expected one of `report`, `libs-name`, ...
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse TOML `content` read from `origin` into `T`.
///
/// `origin` is only used for error messages.
///
/// ```rust
/// use depsym_cli::config::parse_config_str;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Config {
///     name: String,
/// }
///
/// let config: Config = parse_config_str("name = \"demo\"", Path::new("demo.toml")).unwrap();
/// assert_eq!(config.name, "demo");
/// ```
pub fn parse_config_str<T>(content: &str, origin: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    toml::from_str(content).with_context(|| format!("Failed to parse config file: {}", origin.display()))
}

/// Read and parse a TOML configuration file.
pub async fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_str(&content, path)
}
