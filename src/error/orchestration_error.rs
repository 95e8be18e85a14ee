//! Workflow orchestration failures.

use thiserror::Error;

use super::kind::ErrorKind;

/// Errors raised while orchestrating remote workflows.
#[derive(Debug, Error)]
pub enum OrchestrationError {
    /// The workflow failed.
    #[error("{0}")]
    Failed(String),

    /// The submitted template failed validation.
    #[error("{0}")]
    InvalidTemplate(String),
}

impl OrchestrationError {
    /// Creates a general workflow failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Creates a template-validation failure.
    pub fn invalid_template(message: impl Into<String>) -> Self {
        Self::InvalidTemplate(message.into())
    }

    /// Returns the classification of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Failed(_) => ErrorKind::Orchestration,
            Self::InvalidTemplate(_) => ErrorKind::InvalidTemplate,
        }
    }

    /// Returns the failure text.
    pub fn message(&self) -> &str {
        match self {
            Self::Failed(message) | Self::InvalidTemplate(message) => message,
        }
    }
}
