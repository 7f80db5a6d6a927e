//! Namespace and OrderBookSide enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL namespace an endpoint lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// Market data, no authentication
    Public,
    /// Order placement and management
    Market,
    /// Balances, deposits, withdrawals and history
    Account,
}

impl Namespace {
    /// Returns the namespace as it appears in the URL path
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Market => "market",
            Self::Account => "account",
        }
    }

    /// Returns true if requests under this namespace must be signed
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Public)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the order book to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderBookSide {
    /// Bids only
    Buy,
    /// Asks only
    Sell,
    /// Both bids and asks
    #[default]
    Both,
}

impl OrderBookSide {
    /// Returns the value sent in the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for OrderBookSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown order book side
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order book side: {0} (expected buy, sell or both)")]
pub struct ParseOrderBookSideError(pub String);

impl FromStr for OrderBookSide {
    type Err = ParseOrderBookSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "both" => Ok(Self::Both),
            _ => Err(ParseOrderBookSideError(s.to_string())),
        }
    }
}
