//! Failure raised when a sealed value is asked to change.

use thiserror::Error;

use super::kind::ErrorKind;

/// A modification was requested on a value that does not permit it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ImmutableError {
    message: String,
}

impl ImmutableError {
    /// Creates a new immutability failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the classification of this failure.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Immutable
    }

    /// Returns the failure text.
    pub fn message(&self) -> &str {
        &self.message
    }
}
