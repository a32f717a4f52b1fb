//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (redirect limit, log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ConsoleConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ConsoleConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Upper bound on the redirect limit; real redirect chains are one hop.
const MAX_REDIRECT_LIMIT: usize = 32;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!(
                "unknown level `{}`, expected one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if config.session.token_path.trim().is_empty() {
        errors.push(ValidationError::new("session.token_path", "must not be empty"));
    }

    if config.guard.max_redirects == 0 || config.guard.max_redirects > MAX_REDIRECT_LIMIT {
        errors.push(ValidationError::new(
            "guard.max_redirects",
            format!("must be between 1 and {MAX_REDIRECT_LIMIT}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&ConsoleConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ConsoleConfig::default();
        config.observability.log_level = "loud".into();
        config.session.token_path = "  ".into();
        config.guard.max_redirects = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["observability.log_level", "session.token_path", "guard.max_redirects"]
        );
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let mut config = ConsoleConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
