//! Request construction
//!
//! An [`ApiRequest`] is an endpoint URL plus an ordered parameter list. The
//! order is the order parameters were added, and it is the order they are
//! serialized in. Private requests always lead with `apiKey` and `nonce`.

use crate::error::{RestError, RestResult};
use bittrex_auth::{Credentials, NonceGenerator, RequestSigner};
use bittrex_types::Namespace;
use std::fmt::Display;
use std::sync::Arc;

/// A single API call, ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    url: String,
    params: Vec<(&'static str, String)>,
    signed: bool,
}

impl ApiRequest {
    /// Create an unsigned request with no parameters
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
            signed: false,
        }
    }

    /// Append a parameter
    pub fn with_param(mut self, key: &'static str, value: impl Display) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Append a parameter only if `value` is present and non-empty
    pub fn with_optional_param(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with_param(key, value),
            _ => self,
        }
    }

    /// Endpoint URL without query string
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parameters in serialization order
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Value of a parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the dispatcher must attach a signature
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Serialize parameters as `key=value` pairs joined by `&`, in order
    pub fn query_string(&self) -> RestResult<String> {
        serde_urlencoded::to_string(&self.params)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))
    }

    /// The exact URI that is sent and signed
    pub fn uri(&self) -> RestResult<String> {
        let query = self.query_string()?;
        if query.is_empty() {
            Ok(self.url.clone())
        } else {
            Ok(format!("{}?{}", self.url, query))
        }
    }
}

/// Builds [`ApiRequest`]s against a base URL
///
/// Holds the credentials and the nonce generator used to authenticate
/// private requests. Clones share the nonce generator, so nonces stay
/// strictly increasing across every clone of a client.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    nonces: Arc<NonceGenerator>,
}

impl RequestBuilder {
    /// Create a new builder
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            nonces: Arc::new(NonceGenerator::new()),
        }
    }

    /// Base URL, e.g. `https://bittrex.com/api/v1.1`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials used for private requests
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Nonce generator shared by this builder and its clones
    pub fn nonces(&self) -> &NonceGenerator {
        &self.nonces
    }

    /// Full URL of an endpoint
    pub fn endpoint_url(&self, namespace: Namespace, method: &str) -> String {
        format!("{}/{}/{}", self.base_url, namespace, method)
    }

    /// Start an unauthenticated request under `/public`
    pub fn public(&self, method: &str) -> ApiRequest {
        ApiRequest::new(self.endpoint_url(Namespace::Public, method))
    }

    /// Start an authenticated request, injecting `apiKey` and `nonce`
    ///
    /// # Errors
    /// Returns [`RestError::InvalidParameter`] for a namespace that is never
    /// signed, and [`RestError::AuthRequired`] if the builder has no credentials.
    pub fn private(&self, namespace: Namespace, method: &str) -> RestResult<ApiRequest> {
        if !namespace.requires_auth() {
            return Err(RestError::InvalidParameter(format!(
                "{}/{} is not a private endpoint",
                namespace, method
            )));
        }

        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        let signer = RequestSigner::new(credentials, &self.nonces);

        let mut request = ApiRequest::new(self.endpoint_url(namespace, method));
        request.params.extend(signer.auth_params());
        request.signed = true;

        Ok(request)
    }
}
