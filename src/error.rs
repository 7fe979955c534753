//! Error types for the jobkit CLI.
//!
//! Uses thiserror for derive macros and keeps every message actionable
//! for the person at the terminal.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for jobkit operations.
#[derive(Error, Debug)]
pub enum JobkitError {
    /// User provided invalid arguments or referenced something that does not exist.
    #[error("{0}")]
    UserError(String),

    /// Input failed a check (scores outside 1-10, empty job description).
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Config or candidate profile could not be read or is invalid.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Pipeline or activity data could not be read, parsed, or written.
    #[error("Data error: {0}")]
    DataError(String),

    /// Placeholder rendering failed.
    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),
}

impl JobkitError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            JobkitError::UserError(_) => exit_codes::USER_ERROR,
            JobkitError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            JobkitError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            JobkitError::DataError(_) => exit_codes::DATA_FAILURE,
            JobkitError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
        }
    }
}

/// Result type alias for jobkit operations.
pub type Result<T> = std::result::Result<T, JobkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = JobkitError::UserError("unknown company".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = JobkitError::ValidationError("score out of range".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn config_and_data_errors_have_distinct_codes() {
        let config = JobkitError::ConfigError("bad json".to_string());
        let data = JobkitError::DataError("bad json".to_string());
        assert_eq!(config.exit_code(), exit_codes::CONFIG_FAILURE);
        assert_eq!(data.exit_code(), exit_codes::DATA_FAILURE);
    }

    #[test]
    fn template_error_converts_and_maps() {
        let err: JobkitError = TemplateError::UnmatchedBrace { position: 3 }.into();
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
        assert_eq!(
            err.to_string(),
            "Template error: unmatched '{' at position 3 in template"
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = JobkitError::ValidationError("role_appeal must be between 1 and 10".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: role_appeal must be between 1 and 10"
        );
    }
}
