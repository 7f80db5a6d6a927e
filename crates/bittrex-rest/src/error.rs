//! Error types for REST API operations

use bittrex_auth::AuthError;
use bittrex_types::{categorize, ErrorCategory, ErrorCode};
use std::time::Duration;

/// Errors that can occur during REST API operations
///
/// Two families matter to callers:
///
/// - **Transport** ([`Http`](Self::Http), [`Status`](Self::Status),
///   [`Parse`](Self::Parse), [`Timeout`](Self::Timeout)): the request never
///   produced a usable envelope.
/// - **Failed API request** ([`Api`](Self::Api)): the exchange answered with
///   `success: false`.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP status {status} from {url}")]
    Status {
        /// Status code
        status: u16,
        /// Requested endpoint (without query string)
        url: String,
        /// Response body, as received
        body: String,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request did not complete before its deadline
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Exchange reported `success: false`
    #[error("Failed API request to {url}: {message}")]
    Api {
        /// Requested endpoint (without query string)
        url: String,
        /// Message from the exchange
        message: String,
        /// Parsed message, if recognized
        code: Option<ErrorCode>,
    },

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    Auth(#[from] AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Create a failed-request error from the envelope's message
    pub fn api(url: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let code = ErrorCode::parse(&message);

        Self::Api {
            url: url.into(),
            message,
            code,
        }
    }

    /// Check if the exchange rejected the request
    pub fn is_api_failure(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if the request failed before a valid envelope was received
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Status { .. } | Self::Parse(_) | Self::Timeout(_)
        )
    }

    /// The exchange's message, for failed API requests
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The recognized error code, for failed API requests
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// The error category, for failed API requests
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Api { message, .. } => Some(categorize(message)),
            _ => None,
        }
    }

    /// Check if a deposit address is still being generated
    pub fn is_address_generating(&self) -> bool {
        self.code() == Some(ErrorCode::AddressGenerating)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
