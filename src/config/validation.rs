//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (cores > 0, known log level)
//! - Reject directive names the option tokenizer could never produce
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Settings → Result<(), Vec<ValidationError>>

use crate::config::schema::Settings;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("loader.directive must not be empty")]
    EmptyDirective,

    #[error("loader.directive '{0}' contains whitespace")]
    DirectiveWhitespace(String),

    #[error("loader.cores must be at least 1")]
    ZeroCores,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check `settings`, collecting every problem found.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let directive = &settings.loader.directive;
    if directive.is_empty() {
        errors.push(ValidationError::EmptyDirective);
    } else if directive.chars().any(char::is_whitespace) {
        errors.push(ValidationError::DirectiveWhitespace(directive.clone()));
    }

    if settings.loader.cores == Some(0) {
        errors.push(ValidationError::ZeroCores);
    }

    let level = settings.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            settings.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
