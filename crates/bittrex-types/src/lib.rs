//! Shared types for the Bittrex REST API
//!
//! This crate holds the pieces every layer of the SDK agrees on. It has
//! minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`ApiResponse`] - The `{success, message, result}` envelope wrapping every response
//! - [`Namespace`] - URL namespace of an endpoint (`public`, `market`, `account`)
//! - [`OrderBookSide`] - Which half of an order book to request
//! - [`ErrorCode`], [`ErrorCategory`] - Mapping of the exchange's failure messages

pub mod enums;
pub mod envelope;
pub mod error_codes;

pub use enums::*;
pub use envelope::*;
pub use error_codes::*;
