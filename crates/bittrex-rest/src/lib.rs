//! REST API client for the Bittrex cryptocurrency exchange
//!
//! This crate binds the Bittrex v1.1 HTTP API: public market data, order
//! placement and account management.
//!
//! # Features
//!
//! - **Public**: Markets, currencies, ticker, summaries, order book, history
//! - **Market**: Limit buy/sell, cancel, open orders
//! - **Account**: Balances, deposit addresses, withdrawals, order and funding history
//!
//! # Authentication
//!
//! Private endpoints carry `apiKey` and `nonce` query parameters and an
//! `apisign` header holding the HMAC-SHA512 of the full request URI.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::{BittrexClient, Credentials, OrderBookSide};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BittrexClient::new()?;
//!     let book = client.get_order_book("BTC-LTC", OrderBookSide::Both).await?;
//!     println!("Order book: {}", book);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::new("api-key", "api-secret")?;
//!     let auth_client = BittrexClient::with_credentials(creds)?;
//!     let balances = auth_client.get_balances().await?;
//!     println!("Balances: {}", balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! Results are returned as the exchange's `result` payload, untouched.
//! Failures reported by the exchange surface as [`RestError::Api`] carrying
//! the request URL and the exchange message.

pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod transport;

// Re-export main types
pub use bittrex_auth::Credentials;
pub use client::{BittrexClient, ClientConfig, DEFAULT_API_VERSION, DEFAULT_HOST};
pub use dispatch::{Dispatcher, SIGNATURE_HEADER};
pub use error::{RestError, RestResult};
pub use request::{ApiRequest, RequestBuilder};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::{MockTransport, RecordedRequest};

// Re-export endpoint groups
pub use endpoints::{AccountEndpoints, DepositAddressStatus, MarketEndpoints, PublicEndpoints};

// Re-export shared types
pub use bittrex_types::{ApiResponse, ErrorCategory, ErrorCode, Namespace, OrderBookSide};
pub use rust_decimal::Decimal;
