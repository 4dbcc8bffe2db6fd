//! Error handling for depsym
//!
//! This module provides the strongly-typed error enum used by the naming engine
//! and the user-facing [`ErrorContext`] wrapper used by the CLI. The error system
//! follows two principles:
//! 1. **Strongly-typed errors** for precise handling inside the library
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Error Categories
//!
//! - **Input**: [`DepsymError::MalformedGraph`], [`DepsymError::ReportNotFound`],
//!   [`DepsymError::ReportParseError`]
//! - **Configuration**: [`DepsymError::AmbiguousConfiguration`] (warning-class),
//!   [`DepsymError::ConfigError`]
//! - **Persistence**: [`DepsymError::FileUnwritable`]
//! - **Internal**: [`DepsymError::InvariantViolation`]
//! - **Rendering**: [`DepsymError::TemplateError`]
//!
//! Standard library and parser errors convert automatically:
//! - [`std::io::Error`] → [`DepsymError::IoError`]
//! - [`toml::de::Error`] → [`DepsymError::TomlError`]
//! - [`serde_json::Error`] → [`DepsymError::JsonError`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use depsym_cli::core::{DepsymError, ErrorContext};
//!
//! let context = ErrorContext::new(DepsymError::ReportNotFound {
//!     path: "build/dependencyUpdates/report.json".to_string(),
//! })
//! .with_suggestion("Run the dependency-updates task first")
//! .with_details("depsym reads the JSON report produced by that task");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for depsym operations
///
/// Fatal variants abort the current command. [`DepsymError::AmbiguousConfiguration`]
/// is never returned as an `Err`; the resolver collects it as a warning in the
/// resolved set so that a stale configuration entry does not block generation.
#[derive(Error, Debug)]
pub enum DepsymError {
    /// A report entry lacks its group or module name.
    ///
    /// Aborts the whole run before anything is written.
    #[error("Malformed dependency report: entry {index} of '{section}' {reason}")]
    MalformedGraph {
        /// Report section holding the bad entry (`current`, `outdated`, ...)
        section: String,
        /// Zero-based position of the entry within its section
        index: usize,
        /// What is missing
        reason: String,
    },

    /// An override name matched no dependency in the report
    #[error("Override '{name}' does not match any dependency")]
    AmbiguousConfiguration {
        /// The configured override entry
        name: String,
        /// Closest known module name, if any
        suggestion: Option<String>,
    },

    /// A target file could not be created, opened, or replaced
    #[error("Cannot write file {path}: {reason}")]
    FileUnwritable {
        /// Path of the target file
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// Two unrelated dependencies ended up with the same generated symbol
    ///
    /// The disambiguation rules are meant to make this impossible, so it is
    /// reported as a defect rather than a recoverable condition.
    #[error("Internal error: symbol '{symbol}' is claimed by {owners}")]
    InvariantViolation {
        /// The colliding symbol
        symbol: String,
        /// Human-readable list of the coordinates claiming it
        owners: String,
    },

    /// Dependency report file missing
    #[error("Dependency report not found: {path}")]
    ReportNotFound {
        /// Expected location of the report
        path: String,
    },

    /// Dependency report is not valid JSON or has the wrong shape
    #[error("Invalid dependency report {file}")]
    ReportParseError {
        /// Path to the report
        file: String,
        /// Parser message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Template rendering failed
    #[error("Failed to render template '{template}'")]
    TemplateError {
        /// Template name
        template: String,
        /// Engine message
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for DepsymError {
    fn clone(&self) -> Self {
        match self {
            Self::MalformedGraph {
                section,
                index,
                reason,
            } => Self::MalformedGraph {
                section: section.clone(),
                index: *index,
                reason: reason.clone(),
            },
            Self::AmbiguousConfiguration {
                name,
                suggestion,
            } => Self::AmbiguousConfiguration {
                name: name.clone(),
                suggestion: suggestion.clone(),
            },
            Self::FileUnwritable {
                path,
                reason,
            } => Self::FileUnwritable {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::InvariantViolation {
                symbol,
                owners,
            } => Self::InvariantViolation {
                symbol: symbol.clone(),
                owners: owners.clone(),
            },
            Self::ReportNotFound {
                path,
            } => Self::ReportNotFound {
                path: path.clone(),
            },
            Self::ReportParseError {
                file,
                reason,
            } => Self::ReportParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::TemplateError {
                template,
                reason,
            } => Self::TemplateError {
                template: template.clone(),
                reason: reason.clone(),
            },
            // io, toml and json errors are not Clone; keep the message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper carrying a user-facing suggestion and details
///
/// Built by [`user_friendly_error`](crate::core::user_friendly_error) for
/// display at the CLI boundary.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DepsymError,
    /// Actionable next step for the user
    pub suggestion: Option<String>,
    /// Extra explanation of what went wrong
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: DepsymError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}
