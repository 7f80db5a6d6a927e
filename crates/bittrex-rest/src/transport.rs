//! HTTP transport abstraction
//!
//! The dispatcher talks to the network only through [`HttpTransport`], so the
//! signing and envelope logic can be unit tested without real HTTP calls.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::transport::{HttpTransport, ReqwestTransport};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), bittrex_rest::RestError> {
//! let transport = ReqwestTransport::new(Duration::from_secs(30), "bittrex-rest/0.1.0")?;
//! let response = transport
//!     .get("https://bittrex.com/api/v1.1/public/getmarkets", &[])
//!     .await?;
//! println!("{}: {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

use crate::error::{RestError, RestResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{instrument, trace};

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl HttpResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations must send `url` byte-for-byte as given: the signature
/// covers the exact query string.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request with the given extra headers
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> RestResult<HttpResponse>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration, user_agent: &str) -> RestResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip_all)]
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> RestResult<HttpResponse> {
        let mut request = self.client.get(url);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RestError::Timeout(self.timeout)
            } else {
                RestError::Http(e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        trace!(status, len = body.len(), "Received response");

        Ok(HttpResponse { status, body })
    }
}

/// Request captured by [`MockTransport`]
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Full URL, query string included
    pub url: String,
    /// Headers sent alongside
    pub headers: Vec<(String, String)>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordedRequest {
    /// URL without the query string
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    /// Raw query string, if any
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }

    /// Decoded query parameters, in order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query()
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default()
    }

    /// Query parameter names, in order
    pub fn query_keys(&self) -> Vec<String> {
        self.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    /// Value of a query parameter
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Value of a header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Mock transport for testing
///
/// Allows injecting predefined responses and capturing sent requests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<RestResult<HttpResponse>>>,
    requests: parking_lot::Mutex<Vec<RecordedRequest>>,
    delay: Option<Duration>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response (to exercise deadlines)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a raw response
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a `success: true` envelope around `result`
    pub fn push_success(&self, result: serde_json::Value) {
        let body = serde_json::json!({"success": true, "message": "", "result": result});
        self.push_response(200, body.to_string());
    }

    /// Queue a `success: false` envelope with `message`
    pub fn push_failure(&self, message: &str) {
        let body = serde_json::json!({"success": false, "message": message, "result": null});
        self.push_response(200, body.to_string());
    }

    /// Queue a transport error
    pub fn push_error(&self, error: RestError) {
        self.responses.lock().push_back(Err(error));
    }

    /// All requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> RestResult<HttpResponse> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(RestError::Parse("no mock response queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[tokio::test]
    async fn test_mock_transport_records_and_replays() {
        let transport = MockTransport::new();
        transport.push_response(200, r#"{"success":true}"#);

        let response = transport
            .get("https://mock.test/api?market=BTC-LTC&type=both", &[("apisign", "abc")])
            .await
            .unwrap();
        assert_eq!(response.body, r#"{"success":true}"#);

        let request = transport.last_request().unwrap();
        assert_eq!(request.path(), "https://mock.test/api");
        assert_eq!(request.query(), Some("market=BTC-LTC&type=both"));
        assert_eq!(request.query_param("type"), Some("both".to_string()));
        assert_eq!(request.header("APISIGN"), Some("abc"));
    }

    #[tokio::test]
    async fn test_mock_transport_exhausted() {
        let transport = MockTransport::new();
        let result = transport.get("https://mock.test", &[]).await;
        assert!(matches!(result, Err(RestError::Parse(_))));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_transport_queued_error() {
        let transport = MockTransport::new();
        transport.push_error(RestError::Timeout(Duration::from_secs(5)));

        let result = transport.get("https://mock.test", &[]).await;
        assert!(matches!(result, Err(RestError::Timeout(_))));
    }
}
