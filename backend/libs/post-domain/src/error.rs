//! Error types for the post domain

use thiserror::Error;

use crate::violation::{violations_from, Violation, ViolationResponse};

/// Result type alias for post domain operations
pub type Result<T> = std::result::Result<T, DomainError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more rules were broken
    #[error("Validation failed: {}", join_messages(.violations))]
    Validation { violations: Vec<Violation> },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Config(_) => 500,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Validation { violations } => violations,
            Self::Config(_) => &[],
        }
    }

    /// Client-facing body for validation failures
    pub fn to_response(&self) -> Option<ViolationResponse> {
        match self {
            Self::Validation { violations } => {
                Some(ViolationResponse::new("Validation failed", violations))
            }
            Self::Config(_) => None,
        }
    }

    /// Log error with appropriate level and context
    pub fn log(&self) {
        match self {
            Self::Validation { violations } => {
                tracing::debug!(count = violations.len(), error = %self, "Client error");
            }
            Self::Config(_) => {
                tracing::error!(error = %self, "Configuration failure");
            }
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation {
            violations: violations_from(&errors),
        }
    }
}

impl From<envy::Error> for DomainError {
    fn from(error: envy::Error) -> Self {
        DomainError::Config(error.to_string())
    }
}
