//! API credentials and request signing
//!
//! Bittrex signs the complete request URI, query string included:
//!
//! ```text
//! apisign = hex(HMAC-SHA512(api_secret, "https://bittrex.com/api/v1.1/market/cancel?apiKey=...&nonce=...&uuid=..."))
//! ```
//!
//! # Security
//!
//! The secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is only ever used as HMAC key material and is never sent.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha512;

use crate::error::{AuthError, AuthResult};
use crate::nonce::NonceGenerator;

type HmacSha512 = Hmac<Sha512>;

/// API credentials for authenticated requests
///
/// The secret is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (sent as the `apiKey` parameter)
    api_key: String,
    /// API secret (HMAC key, zeroized on drop)
    api_secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] if either value is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<str>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.as_ref();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretBox::new(Box::new(api_secret.as_bytes().to_vec())),
        })
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a fully serialized request URI
    ///
    /// # Returns
    /// Lowercase hex HMAC-SHA512 of `uri`, 128 characters long
    pub fn sign(&self, uri: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(self.api_secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(uri.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", self.api_key.chars().take(8).collect::<String>()),
            )
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Per-request signer
///
/// Draws a fresh nonce on creation, so one signer corresponds to exactly one
/// request.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials, nonces: &NonceGenerator) -> Self {
        Self {
            credentials,
            nonce: nonces.generate(),
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// The authentication parameters, in the order they lead the query string
    pub fn auth_params(&self) -> [(&'static str, String); 2] {
        [
            ("apiKey", self.api_key().to_string()),
            ("nonce", self.nonce.to_string()),
        ]
    }

    /// Sign the request URI
    pub fn sign(&self, uri: &str) -> String {
        self.credentials.sign(uri)
    }
}
