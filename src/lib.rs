//! Failure taxonomy and response-diagnostic mining for HTTP API clients.
//!
//! `gripe` is the error layer for clients that talk to heterogeneous remote
//! APIs, where some providers report failures as JSON, some as XML, and
//! some as plain text. It provides:
//!
//! - **A navigable failure hierarchy**: handlers match broadly
//!   ([`ErrorKind::Api`]) or narrowly ([`ErrorKind::Authentication`]) via
//!   kind ancestry
//! - **Best-effort diagnostics**: API failures mine a human-readable
//!   message out of the triggering response body, whatever its format,
//!   and never raise while doing so
//! - **Response snapshots**: [`ApiResponse`] keeps the status, headers,
//!   and body of a failed call inspectable after the transport layer has
//!   moved on
//!
//! ## Example
//!
//! ```rust
//! use gripe::{ApiError, ApiResponse, Error, ErrorKind};
//! use reqwest::StatusCode;
//!
//! let response = ApiResponse::new(
//!     StatusCode::UNAUTHORIZED,
//!     r#"{"auth":{"message":"token expired"}}"#,
//! );
//! let err: Error = ApiError::from_status("signin rejected", response).into();
//!
//! assert_eq!(err.to_string(), "signin rejected - token expired");
//! assert_eq!(err.kind(), ErrorKind::Authentication);
//! assert!(err.is(ErrorKind::Api));
//! assert!(!err.is(ErrorKind::Orchestration));
//! ```

pub mod error;
pub mod response;

// Re-exports for convenience
pub use error::{ApiError, Error, ErrorKind, ImmutableError, Lineage, OrchestrationError, Result};
pub use response::{extract_message, ApiResponse};
