//! Project configuration (`depsym.toml`).

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parser::parse_config;
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_BUILDSRC_DIR, DEFAULT_INDENT, DEFAULT_LIBS, DEFAULT_PROPERTIES_FILE,
    DEFAULT_REPORT_PATH, DEFAULT_VERSIONS,
};
use crate::core::DepsymError;
use crate::render::{KotlinOptions, OrderBy};
use crate::resolver::{NamingConfig, VirtualGroup, VirtualGroupRegistry};
use crate::version::StabilityPolicy;

/// Contents of `depsym.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Dependency report, relative to the project directory
    pub report: Option<PathBuf>,
    pub libs_name: Option<String>,
    pub versions_name: Option<String>,
    pub indent: Option<String>,
    #[serde(default)]
    pub order_by: OrderBy,
    /// Module names, escaped module names or groups that always use group+module
    #[serde(default)]
    pub use_fqdn_for: Vec<String>,
    /// Replaces the built-in deny-list when present
    pub meaningless_names: Option<Vec<String>>,
    #[serde(default)]
    pub reject_non_stable: bool,
    /// Replaces the built-in virtual groups when present
    pub virtual_groups: Option<Vec<VirtualGroup>>,
    pub properties_file: Option<PathBuf>,
    pub buildsrc_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load `path`, or the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read, parsed or
    /// validated.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path).await
    }

    /// Load and validate `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, parsed or validated.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path).await?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default configuration path inside `project_dir`.
    pub fn default_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Check values serde cannot check.
    ///
    /// # Errors
    ///
    /// [`DepsymError::ConfigError`] naming the first invalid key.
    pub fn validate(&self) -> Result<(), DepsymError> {
        for (key, value) in [("libs-name", &self.libs_name), ("versions-name", &self.versions_name)] {
            match value {
                Some(name) if !is_kotlin_identifier(name) => {
                    return Err(config_error(format!("{key} '{name}' is not a valid Kotlin identifier")));
                }
                _ => {}
            }
        }

        if self.indent.as_deref().is_some_and(|indent| !indent.chars().all(|c| c == ' ' || c == '\t')) {
            return Err(config_error("indent may only contain spaces and tabs"));
        }

        let options = self.kotlin_options();
        if options.libs_name == options.versions_name {
            return Err(config_error(format!(
                "libs-name and versions-name both resolve to '{}'",
                options.libs_name
            )));
        }

        for group in self.virtual_groups.iter().flatten() {
            if group.label.trim().is_empty() {
                return Err(config_error("virtual group with an empty label"));
            }
            if group.members.is_empty() {
                return Err(config_error(format!("virtual group '{}' has no members", group.label)));
            }
            if let Some(member) = group.members.iter().find(|member| member.group.trim().is_empty()) {
                return Err(config_error(format!(
                    "virtual group '{}' has a member with an empty group (prefix '{}')",
                    group.label, member.module_prefix
                )));
            }
        }

        Ok(())
    }

    /// Immutable naming configuration for the resolver.
    pub fn naming_config(&self) -> NamingConfig {
        let mut config = NamingConfig::default().with_use_fqdn_for(self.use_fqdn_for.iter().cloned());
        if let Some(names) = &self.meaningless_names {
            config = config.with_meaningless_names(names.iter().cloned());
        }
        if let Some(groups) = &self.virtual_groups {
            config = config.with_virtual_groups(VirtualGroupRegistry::new(groups.clone()));
        }
        if self.reject_non_stable {
            config = config.with_stability(StabilityPolicy::RejectNonStable);
        }
        config
    }

    pub fn kotlin_options(&self) -> KotlinOptions {
        KotlinOptions {
            libs_name: self.libs_name.clone().unwrap_or_else(|| DEFAULT_LIBS.to_string()),
            versions_name: self.versions_name.clone().unwrap_or_else(|| DEFAULT_VERSIONS.to_string()),
            indent: self.indent.clone().unwrap_or_else(|| DEFAULT_INDENT.to_string()),
            order_by: self.order_by,
        }
    }

    pub fn report_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.report.as_deref().unwrap_or(Path::new(DEFAULT_REPORT_PATH)))
    }

    pub fn properties_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.properties_file.as_deref().unwrap_or(Path::new(DEFAULT_PROPERTIES_FILE)))
    }

    pub fn buildsrc_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.buildsrc_dir.as_deref().unwrap_or(Path::new(DEFAULT_BUILDSRC_DIR)))
    }
}

fn config_error(message: impl Into<String>) -> DepsymError {
    DepsymError::ConfigError {
        message: message.into(),
    }
}

fn is_kotlin_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
