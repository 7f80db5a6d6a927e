//! Signed request dispatch
//!
//! Turns an [`ApiRequest`] into the `result` payload of the exchange's
//! response:
//!
//! 1. Serialize the parameters into the query string, in order
//! 2. Build the URI (`url?query`)
//! 3. For private requests, sign the URI (HMAC-SHA512, hex) into `apisign`
//! 4. GET the exact URI that was signed
//! 5. Unwrap the `{success, message, result}` envelope
//!
//! Every call is attempted once. Retrying is left to the caller.

use crate::error::{RestError, RestResult};
use crate::request::ApiRequest;
use crate::transport::{HttpResponse, HttpTransport};
use bittrex_auth::Credentials;
use bittrex_types::ApiResponse;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "apisign";

/// Sends requests over a transport, signing the private ones
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    credentials: Option<Credentials>,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Option<Credentials>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Dispatch a request and return the envelope's `result`
    ///
    /// # Arguments
    /// * `request` - Request to send
    /// * `deadline` - Optional limit on the whole round trip
    ///
    /// # Errors
    /// [`RestError::Api`] when the exchange answers `success: false`;
    /// a transport-class error when no valid envelope arrives.
    #[instrument(skip_all, fields(url = %request.url(), signed = request.is_signed()))]
    pub async fn execute(
        &self,
        request: &ApiRequest,
        deadline: Option<Duration>,
    ) -> RestResult<Value> {
        let uri = request.uri()?;

        let signature = if request.is_signed() {
            let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
            Some(credentials.sign(&uri))
        } else {
            None
        };

        let headers: Vec<(&str, &str)> = signature
            .as_deref()
            .map(|signature| vec![(SIGNATURE_HEADER, signature)])
            .unwrap_or_default();

        debug!(params = request.params().len(), "Dispatching request");

        let call = self.transport.get(&uri, &headers);
        let response = match deadline {
            Some(deadline) => tokio::time::timeout(deadline, call)
                .await
                .map_err(|_| RestError::Timeout(deadline))??,
            None => call.await?,
        };

        interpret(request.url(), response)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Check the status, parse the envelope and unwrap `result`
fn interpret(url: &str, response: HttpResponse) -> RestResult<Value> {
    if !response.is_success() {
        warn!(url, status = response.status, "Non-success HTTP status");
        return Err(RestError::Status {
            status: response.status,
            url: url.to_string(),
            body: response.body,
        });
    }

    let envelope: ApiResponse = serde_json::from_str(&response.body)
        .map_err(|e| RestError::Parse(format!("invalid response from {}: {}", url, e)))?;

    envelope.into_result().map_err(|message| {
        warn!(url, %message, "Failed API request");
        RestError::api(url, message)
    })
}
