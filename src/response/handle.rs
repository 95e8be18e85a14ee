//! Owned snapshot of a completed HTTP response.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// An owned, read-only snapshot of a completed HTTP response.
///
/// Failures in the [`ApiError`](crate::ApiError) family carry one of these
/// so the triggering status, headers, and body stay inspectable long after
/// the transport layer has moved on. The body is held as text; diagnostic
/// extraction runs against it exactly once, when the failure is built.
///
/// Snapshots are either assembled by hand ([`new`](Self::new) plus the
/// `with_*` attachments) or drained from a live response with
/// [`read`](Self::read).
///
/// ## Examples
///
/// ```rust
/// use gripe::ApiResponse;
/// use reqwest::StatusCode;
///
/// let response = ApiResponse::new(StatusCode::BAD_REQUEST, r#"{"oops":true}"#);
/// assert_eq!(response.status(), StatusCode::BAD_REQUEST);
/// assert_eq!(response.body(), r#"{"oops":true}"#);
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Option<Url>,
    body: String,
}

impl ApiResponse {
    /// Creates a snapshot from a status and body text.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            url: None,
            body: body.into(),
        }
    }

    /// Creates a snapshot from a status and a raw body already drained
    /// from the wire. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_bytes(status: StatusCode, body: bytes::Bytes) -> Self {
        Self::new(status, String::from_utf8_lossy(&body).into_owned())
    }

    /// Attaches the response headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Attaches the final request URL.
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Snapshots a live `reqwest` response, draining its body.
    ///
    /// Never fails: a body that cannot be read snapshots as empty, and
    /// non-UTF-8 bytes are replaced, so building an error report cannot
    /// itself raise a secondary failure.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let response = client.get(url).send().await?;
    /// if !response.status().is_success() {
    ///     let snapshot = ApiResponse::read(response).await;
    ///     return Err(ApiError::from_status("lookup failed", snapshot).into());
    /// }
    /// ```
    pub async fn read(response: reqwest::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = match response.bytes().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(error) => {
                debug!("failed to read {} response body: {}", status, error);
                String::new()
            }
        };
        Self {
            status,
            headers,
            url: Some(url),
            body,
        }
    }

    /// Returns the HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the final request URL, if known.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Returns the body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_hand_built_snapshot() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let url = Url::parse("https://api.example.com/stacks").unwrap();

        let response = ApiResponse::new(StatusCode::NOT_FOUND, "missing")
            .with_headers(headers)
            .with_url(url);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), "missing");
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.url().unwrap().path(), "/stacks");
    }

    #[test]
    fn test_from_bytes_replaces_invalid_utf8() {
        let body = bytes::Bytes::from_static(&[0xff, b'o', b'k']);
        let response = ApiResponse::from_bytes(StatusCode::BAD_GATEWAY, body);
        assert!(response.body().contains("ok"));
        assert!(response.body().contains('\u{FFFD}'));
    }

    #[tokio::test]
    async fn test_read_snapshots_live_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_string("boom")
                    .insert_header("x-request-id", "abc123"),
            )
            .mount(&mock_server)
            .await;

        let live = reqwest::get(format!("{}/broken", mock_server.uri()))
            .await
            .unwrap();
        let snapshot = ApiResponse::read(live).await;

        assert_eq!(snapshot.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(snapshot.body(), "boom");
        assert_eq!(snapshot.headers().get("x-request-id").unwrap(), "abc123");
        assert_eq!(snapshot.url().unwrap().path(), "/broken");
    }

    #[tokio::test]
    async fn test_read_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let live = reqwest::get(format!("{}/empty", mock_server.uri()))
            .await
            .unwrap();
        let snapshot = ApiResponse::read(live).await;

        assert_eq!(snapshot.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(snapshot.body(), "");
    }
}
