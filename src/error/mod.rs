//! Layered failure types for remote API interactions.
//!
//! The hierarchy is structured so handlers can match as broadly or as
//! narrowly as they need:
//! - [`Error`] - Top-level failure type, the root `generic` classification
//! - [`ApiError`] - Failures raised from remote API calls (`api`,
//!   `request`, `authentication`)
//! - [`OrchestrationError`] - Workflow failures (`orchestration`,
//!   `invalid_template`)
//! - [`ImmutableError`] - Modification requests against sealed values
//!   (`immutable`)
//!
//! Every failure reports an [`ErrorKind`], and [`Error::is`] walks the
//! kind's ancestry: a handler for [`ErrorKind::Api`] also catches request
//! and authentication failures.

mod api_error;
mod immutable_error;
mod kind;
mod orchestration_error;

pub use api_error::ApiError;
pub use immutable_error::ImmutableError;
pub use kind::{ErrorKind, Lineage};
pub use orchestration_error::OrchestrationError;

use thiserror::Error as ThisError;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level failure type.
///
/// Aggregates the failure categories, enabling unified error handling while
/// preserving the ability to match on specific categories when needed.
///
/// ## Examples
///
/// ```rust
/// use gripe::{Error, ErrorKind, OrchestrationError};
///
/// let err: Error = OrchestrationError::invalid_template("unknown key").into();
///
/// assert_eq!(err.kind(), ErrorKind::InvalidTemplate);
/// assert!(err.is(ErrorKind::Orchestration));
/// assert!(!err.is(ErrorKind::Api));
/// ```
#[derive(Debug, ThisError)]
pub enum Error {
    /// A failure with no more specific classification.
    #[error("{0}")]
    Generic(String),

    /// Failure raised from a remote API call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Workflow orchestration failure.
    #[error(transparent)]
    Orchestration(#[from] OrchestrationError),

    /// A sealed value was asked to change.
    #[error(transparent)]
    Immutable(#[from] ImmutableError),
}

impl Error {
    /// Creates a failure with no more specific classification.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }

    /// Returns the most specific classification of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Generic(_) => ErrorKind::Generic,
            Self::Api(err) => err.kind(),
            Self::Orchestration(err) => err.kind(),
            Self::Immutable(err) => err.kind(),
        }
    }

    /// Returns `true` if this failure is classifiable as `kind`, walking
    /// the full ancestry.
    ///
    /// A request failure `is` [`ErrorKind::Api`] and [`ErrorKind::Generic`];
    /// an invalid-template failure `is` [`ErrorKind::Orchestration`] but
    /// never [`ErrorKind::Api`].
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind().is_within(kind)
    }

    /// Returns the failure text supplied at the raise site, without any
    /// mined diagnostic.
    pub fn message(&self) -> &str {
        match self {
            Self::Generic(message) => message,
            Self::Api(err) => err.message(),
            Self::Orchestration(err) => err.message(),
            Self::Immutable(err) => err.message(),
        }
    }
}
