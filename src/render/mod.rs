//! Kotlin `buildSrc` generation.
//!
//! Writes two objects into `<buildsrc>/src/main/kotlin/`:
//!
//! - `Versions.kt`: one `const val` per distinct version symbol, with an
//!   `// available: "x"` comment when the report offers a newer version, plus
//!   `gradleLatestVersion`.
//! - `Libs.kt`: one `const val` per coordinate, concatenating the coordinate
//!   with the matching `Versions` symbol.
//!
//! A fresh `buildSrc` also receives a minimal `build.gradle.kts` and
//! `.gitignore`. Existing ones are never touched.

pub mod kotlin;

pub use kotlin::{kotlin_string, render_libs, render_versions};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{DEFAULT_INDENT, DEFAULT_LIBS, DEFAULT_VERSIONS, INITIAL_BUILD_GRADLE_KTS, INITIAL_GITIGNORE};
use crate::models::NamedDependency;
use crate::resolver::ResolvedSet;
use crate::utils::{ensure_dir, safe_write, write_if_absent};

/// Property order inside the generated objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    /// Mode, then longest name first, then name
    #[default]
    GroupAndLength,
    /// Mode, then name
    GroupAndAlphabetical,
}

/// Rendering options for the Kotlin objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinOptions {
    pub libs_name: String,
    pub versions_name: String,
    pub indent: String,
    pub order_by: OrderBy,
}

impl Default for KotlinOptions {
    fn default() -> Self {
        Self {
            libs_name: DEFAULT_LIBS.to_string(),
            versions_name: DEFAULT_VERSIONS.to_string(),
            indent: DEFAULT_INDENT.to_string(),
            order_by: OrderBy::default(),
        }
    }
}

/// Sort `dependencies` for display, keyed by `name`.
///
/// The sort is stable, so equal keys keep their resolved order.
pub fn sorted_for_render<'a>(
    mut dependencies: Vec<&'a NamedDependency>,
    order_by: OrderBy,
    name: impl Fn(&NamedDependency) -> &str,
) -> Vec<&'a NamedDependency> {
    match order_by {
        OrderBy::GroupAndLength => dependencies.sort_by(|a, b| {
            a.mode
                .cmp(&b.mode)
                .then_with(|| name(*b).len().cmp(&name(*a).len()))
                .then_with(|| name(*a).cmp(name(*b)))
        }),
        OrderBy::GroupAndAlphabetical => {
            dependencies.sort_by(|a, b| a.mode.cmp(&b.mode).then_with(|| name(*a).cmp(name(*b))))
        }
    }
    dependencies
}

/// Files written by [`write_buildsrc`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Always rewritten
    pub sources: Vec<PathBuf>,
    /// Created because they were missing
    pub scaffolding: Vec<PathBuf>,
}

/// Render both objects into `buildsrc_dir`.
///
/// # Errors
///
/// Returns an error when rendering fails or a file cannot be written.
pub fn write_buildsrc(buildsrc_dir: &Path, resolved: &ResolvedSet, options: &KotlinOptions) -> Result<GeneratedFiles> {
    let kotlin_dir = buildsrc_dir.join("src").join("main").join("kotlin");
    ensure_dir(&kotlin_dir)?;

    let mut generated = GeneratedFiles::default();

    for (object, source) in [
        (&options.versions_name, render_versions(resolved, options)?),
        (&options.libs_name, render_libs(resolved, options)?),
    ] {
        let path = kotlin_dir.join(format!("{object}.kt"));
        safe_write(&path, &source).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        generated.sources.push(path);
    }

    for (name, content) in [("build.gradle.kts", INITIAL_BUILD_GRADLE_KTS), (".gitignore", INITIAL_GITIGNORE)] {
        let path = buildsrc_dir.join(name);
        if write_if_absent(&path, content)? {
            info!("Created {}", path.display());
            generated.scaffolding.push(path);
        }
    }

    Ok(generated)
}
