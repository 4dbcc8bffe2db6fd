//! File system utilities
//!
//! Small set of helpers used by the generators: directory creation, atomic
//! whole-file replacement and "create only if missing" writes.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depsym_cli::utils::fs::{ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("buildSrc/src/main/kotlin"))?;
//! safe_write(Path::new("buildSrc/src/main/kotlin/Versions.kt"), "object Versions")?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// Returns an error when the path exists but is not a directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically replaces a file's contents using a write-then-rename strategy.
///
/// The content is written to a temporary file in the target's directory,
/// synced, then persisted over the target. Readers never observe a partially
/// written file. Parent directories are created when missing.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write temp file for: {}", path.display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}

/// Reads a text file, returning `None` when it does not exist.
pub fn read_optional_text(path: &Path) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Writes `content` to `path` only if no file exists there yet.
///
/// Returns `true` when the file was created.
pub fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        tracing::debug!("Keeping existing {}", path.display());
        return Ok(false);
    }
    safe_write(path, content)?;
    Ok(true)
}
