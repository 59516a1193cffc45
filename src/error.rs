//! Error types returned by configuration and validation.

use thiserror::Error;

/// Failure to load a policy document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse password policy: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by [`PasswordValidator::validate`](crate::PasswordValidator::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `validate` was called before any rule was registered.
    #[error("No validators loaded.")]
    NotConfigured,
    /// The first rule that rejected the password.
    #[error("{message}")]
    RuleViolation { rule: String, message: String },
}

impl ValidationError {
    /// Name of the rule that failed, if this is a rule violation.
    pub fn rule(&self) -> Option<&str> {
        match self {
            ValidationError::RuleViolation { rule, .. } => Some(rule.as_str()),
            ValidationError::NotConfigured => None,
        }
    }
}
