//! Authentication primitives for the Bittrex API
//!
//! Private Bittrex endpoints are authenticated by three things travelling with
//! every request:
//!
//! - the `apiKey` query parameter
//! - a strictly increasing `nonce` query parameter
//! - an `apisign` header holding the lowercase hex HMAC-SHA512 of the full
//!   request URI, keyed with the account secret
//!
//! # Example
//!
//! ```
//! use bittrex_auth::{Credentials, NonceGenerator, RequestSigner};
//!
//! # fn example() -> Result<(), bittrex_auth::AuthError> {
//! let creds = Credentials::new("my-api-key", "my-api-secret")?;
//! let nonces = NonceGenerator::new();
//!
//! let signer = RequestSigner::new(&creds, &nonces);
//! let uri = format!(
//!     "https://bittrex.com/api/v1.1/account/getbalances?apiKey={}&nonce={}",
//!     signer.api_key(),
//!     signer.nonce()
//! );
//! let signature = signer.sign(&uri);
//! assert_eq!(signature.len(), 128);
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;

pub use credentials::{Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};
pub use nonce::NonceGenerator;
