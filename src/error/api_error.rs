//! Failures raised from remote API calls.

use std::fmt;

use reqwest::StatusCode;
use tracing::debug;

use super::kind::ErrorKind;
use crate::response::{extract_message, ApiResponse};

/// Failure raised from a remote API call.
///
/// Carries the failure text supplied at the raise site plus, when the
/// triggering HTTP response is attached, a diagnostic mined from the
/// response body. Extraction runs once, at construction; rendering the
/// failure is pure and repeatable. A body the extractor cannot make sense
/// of degrades to "no diagnostic", never to a secondary failure.
///
/// The rendered message is the base text alone, or
/// `"{base} - {diagnostic}"` when a diagnostic was found.
///
/// ## Examples
///
/// ```rust
/// use gripe::{ApiError, ApiResponse, ErrorKind};
/// use reqwest::StatusCode;
///
/// let response = ApiResponse::new(
///     StatusCode::BAD_REQUEST,
///     r#"{"error":{"message":"unknown flavor"}}"#,
/// );
/// let err = ApiError::request("create failed", response);
///
/// assert_eq!(err.to_string(), "create failed - unknown flavor");
/// assert!(err.kind().is_within(ErrorKind::Api));
/// ```
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    response: Option<ApiResponse>,
    diagnostic: Option<String>,
}

impl ApiError {
    /// Creates an API failure with no narrower classification.
    pub fn new(message: impl Into<String>, response: impl Into<Option<ApiResponse>>) -> Self {
        Self::with_kind(ErrorKind::Api, message, response)
    }

    /// Creates a request failure: the API rejected or could not complete
    /// the request itself.
    pub fn request(message: impl Into<String>, response: impl Into<Option<ApiResponse>>) -> Self {
        Self::with_kind(ErrorKind::Request, message, response)
    }

    /// Creates an authentication failure: the API rejected the caller's
    /// credentials.
    pub fn authentication(
        message: impl Into<String>,
        response: impl Into<Option<ApiResponse>>,
    ) -> Self {
        Self::with_kind(ErrorKind::Authentication, message, response)
    }

    /// Picks the failure flavor from the response's HTTP status.
    ///
    /// `401` and `403` are credential rejections and become authentication
    /// failures; any other client error becomes a request failure;
    /// everything else stays a plain API failure.
    pub fn from_status(message: impl Into<String>, response: ApiResponse) -> Self {
        let kind = match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::Authentication,
            status if status.is_client_error() => ErrorKind::Request,
            _ => ErrorKind::Api,
        };
        Self::with_kind(kind, message, response)
    }

    fn with_kind(
        kind: ErrorKind,
        message: impl Into<String>,
        response: impl Into<Option<ApiResponse>>,
    ) -> Self {
        let response = response.into();
        let diagnostic = response
            .as_ref()
            .and_then(|response| extract_message(response.body()));
        if let Some(found) = &diagnostic {
            debug!("extracted diagnostic from {} response body: {}", kind, found);
        }
        Self {
            kind,
            message: message.into(),
            response,
            diagnostic,
        }
    }

    /// Returns the classification of this failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the failure text supplied at the raise site. Rendering
    /// appends the mined diagnostic; this accessor never does.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the diagnostic mined from the response body, if one was
    /// found.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Returns the HTTP response that triggered this failure, if attached.
    pub fn response(&self) -> Option<&ApiResponse> {
        self.response.as_ref()
    }

    /// Returns the HTTP status of the attached response.
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(|response| response.status())
    }

    /// Returns `true` if retrying the call could plausibly succeed.
    ///
    /// Server errors and 429 (rate limit) are retryable; everything else,
    /// including failures with no attached response, is not.
    pub fn is_retryable(&self) -> bool {
        match self.status() {
            Some(status) => status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS,
            None => false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.diagnostic {
            Some(diagnostic) => write!(f, "{} - {}", self.message, diagnostic),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}
