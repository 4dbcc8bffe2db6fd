//! Error formatting utilities for depsym
//!
//! Converts internal errors into clear, actionable messages for users.

use super::error::{DepsymError, ErrorContext};

/// Convert any error into a user-friendly format with contextual suggestions
///
/// Walks the error chain looking for a [`DepsymError`] first, then for the
/// parser and IO errors depsym commonly wraps. Anything else is shown with its
/// full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut current_error: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(depsym_error) = current_error.downcast_ref::<DepsymError>() {
            return create_error_context(depsym_error);
        }

        match current_error.source() {
            Some(source) => current_error = source,
            None => break,
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DepsymError::FileUnwritable {
                    path: "unknown".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check file ownership and permissions")
                .with_details("depsym could not read or write one of its files");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DepsymError::Other {
                    message: error_with_chain(&error),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DepsymError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in depsym.toml. Verify quotes, brackets, and key names")
        .with_details("Keys use kebab-case, e.g. 'use-fqdn-for' and 'virtual-groups'");
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(DepsymError::ReportParseError {
            file: "report.json".to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion("Regenerate the dependency report and try again");
    }

    ErrorContext::new(DepsymError::Other {
        message: error_with_chain(&error),
    })
    .with_details("An unexpected error occurred. Please report this issue if it persists.")
}

/// Render an error followed by its numbered cause chain
fn error_with_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }
    message
}

/// Create a user-friendly error context from a [`DepsymError`]
pub fn create_error_context(error: &DepsymError) -> ErrorContext {
    match error {
        DepsymError::MalformedGraph {
            section,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Regenerate the dependency report; every entry needs a group and a name")
            .with_details(format!("The '{section}' section contains an incomplete entry, nothing was written")),
        DepsymError::ReportNotFound {
            path,
        } => ErrorContext::new(error.clone())
            .with_suggestion("Run `./gradlew dependencyUpdates` first, or pass --report")
            .with_details(format!("Expected the JSON report at {path}")),
        DepsymError::ReportParseError {
            reason,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Make sure the report was produced with the JSON output format")
            .with_details(reason.clone()),
        DepsymError::FileUnwritable {
            path,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Check that '{path}' and its directory are writable"))
            .with_details("Generated names were resolved; only writing this file failed"),
        DepsymError::InvariantViolation {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Add one of the colliding modules to 'use-fqdn-for' and please report this issue")
            .with_details("Two unrelated dependencies would have shared a generated name"),
        DepsymError::AmbiguousConfiguration {
            suggestion,
            ..
        } => {
            let context = ErrorContext::new(error.clone());
            match suggestion {
                Some(name) => context.with_suggestion(format!("Did you mean '{name}'?")),
                None => context.with_suggestion("Remove the stale entry from 'use-fqdn-for'"),
            }
        }
        DepsymError::ConfigError {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Check depsym.toml against the documented keys"),
        DepsymError::TemplateError {
            reason,
            ..
        } => ErrorContext::new(error.clone()).with_details(reason.clone()),
        _ => ErrorContext::new(error.clone()),
    }
}
