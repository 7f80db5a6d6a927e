//! API endpoint implementations

pub mod account;
pub mod market;
pub mod public;

pub use account::{AccountEndpoints, DepositAddressStatus};
pub use market::MarketEndpoints;
pub use public::PublicEndpoints;
