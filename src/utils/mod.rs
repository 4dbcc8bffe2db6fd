//! Utilities shared by the generators
//!
//! # Modules
//!
//! - [`fs`] - File system operations with atomic writes

pub mod fs;

pub use fs::{atomic_write, ensure_dir, read_optional_text, safe_write, write_if_absent};
