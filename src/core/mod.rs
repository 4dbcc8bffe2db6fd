//! Core types for depsym
//!
//! This module holds the error system shared by every other module:
//! - [`DepsymError`] - Enumerated error types covering all depsym failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! # Examples
//!
//! ```rust
//! use depsym_cli::core::{DepsymError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(DepsymError::ReportNotFound { path: "report.json".into() }.into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;
pub mod error_formatting;

pub use error::{DepsymError, ErrorContext};
pub use error_formatting::{create_error_context, user_friendly_error};
