//! Mapping of Bittrex failure messages
//!
//! A failed request comes back as `{"success": false, "message": "INVALID_MARKET"}`.
//! The message is an upper-snake-case token; this module turns the known ones
//! into [`ErrorCode`] values so callers can branch without string matching.
//!
//! Classification is informational. Nothing in the SDK retries on its own.

use std::fmt;

/// Broad grouping of exchange failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unknown or malformed market
    Market,
    /// Order placement or lookup problems
    Order,
    /// Balance, deposit and withdrawal problems
    Funds,
    /// API key, signature or nonce rejected
    Authentication,
    /// Required parameter missing or invalid
    Parameter,
    /// Request accepted but the resource is not ready yet
    Pending,
    /// Not recognized
    Unknown,
}

/// Known Bittrex failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // === Market ===
    /// INVALID_MARKET
    InvalidMarket,
    /// MARKET_NOT_PROVIDED
    MarketNotProvided,
    /// MARKET_OFFLINE
    MarketOffline,

    // === Authentication ===
    /// APIKEY_NOT_PROVIDED
    ApiKeyNotProvided,
    /// APIKEY_INVALID
    ApiKeyInvalid,
    /// INVALID_SIGNATURE
    InvalidSignature,
    /// NONCE_NOT_PROVIDED
    NonceNotProvided,
    /// INVALID_PERMISSION
    InvalidPermission,

    // === Order ===
    /// INSUFFICIENT_FUNDS
    InsufficientFunds,
    /// MIN_TRADE_REQUIREMENT_NOT_MET
    MinTradeRequirementNotMet,
    /// DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT
    DustTradeDisallowed,
    /// ORDER_NOT_OPEN
    OrderNotOpen,
    /// INVALID_ORDER
    InvalidOrder,
    /// INVALID_ORDER_TYPE
    InvalidOrderType,
    /// UUID_INVALID
    UuidInvalid,
    /// QUANTITY_NOT_PROVIDED
    QuantityNotProvided,
    /// QUANTITY_INVALID
    QuantityInvalid,
    /// RATE_NOT_PROVIDED
    RateNotProvided,
    /// RATE_INVALID
    RateInvalid,

    // === Funds ===
    /// INVALID_CURRENCY
    InvalidCurrency,
    /// CURRENCY_NOT_PROVIDED
    CurrencyNotProvided,
    /// CURRENCY_OFFLINE
    CurrencyOffline,
    /// INVALID_ADDRESS
    InvalidAddress,
    /// ADDRESS_NOT_PROVIDED
    AddressNotProvided,
    /// WITHDRAWAL_TOO_SMALL
    WithdrawalTooSmall,
    /// ADDRESS_GENERATING
    AddressGenerating,
}

impl ErrorCode {
    /// Parse the `message` field of a failed response
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn parse(message: &str) -> Option<Self> {
        let normalized = message.trim().to_ascii_uppercase();

        Some(match normalized.as_str() {
            "INVALID_MARKET" => Self::InvalidMarket,
            "MARKET_NOT_PROVIDED" => Self::MarketNotProvided,
            "MARKET_OFFLINE" => Self::MarketOffline,

            "APIKEY_NOT_PROVIDED" => Self::ApiKeyNotProvided,
            "APIKEY_INVALID" => Self::ApiKeyInvalid,
            "INVALID_SIGNATURE" => Self::InvalidSignature,
            "NONCE_NOT_PROVIDED" => Self::NonceNotProvided,
            "INVALID_PERMISSION" => Self::InvalidPermission,

            "INSUFFICIENT_FUNDS" => Self::InsufficientFunds,
            "MIN_TRADE_REQUIREMENT_NOT_MET" => Self::MinTradeRequirementNotMet,
            "ORDER_NOT_OPEN" => Self::OrderNotOpen,
            "INVALID_ORDER" => Self::InvalidOrder,
            "INVALID_ORDER_TYPE" => Self::InvalidOrderType,
            "UUID_INVALID" => Self::UuidInvalid,
            "QUANTITY_NOT_PROVIDED" => Self::QuantityNotProvided,
            "QUANTITY_INVALID" => Self::QuantityInvalid,
            "RATE_NOT_PROVIDED" => Self::RateNotProvided,
            "RATE_INVALID" => Self::RateInvalid,

            "INVALID_CURRENCY" => Self::InvalidCurrency,
            "CURRENCY_NOT_PROVIDED" => Self::CurrencyNotProvided,
            "CURRENCY_OFFLINE" => Self::CurrencyOffline,
            "INVALID_ADDRESS" => Self::InvalidAddress,
            "ADDRESS_NOT_PROVIDED" => Self::AddressNotProvided,
            "WITHDRAWAL_TOO_SMALL" => Self::WithdrawalTooSmall,
            "ADDRESS_GENERATING" => Self::AddressGenerating,

            // The dust threshold is baked into the message and has changed over time
            other if other.starts_with("DUST_TRADE_DISALLOWED") => Self::DustTradeDisallowed,
            _ => return None,
        })
    }

    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidMarket | Self::MarketOffline => ErrorCategory::Market,

            Self::ApiKeyNotProvided
            | Self::ApiKeyInvalid
            | Self::InvalidSignature
            | Self::NonceNotProvided
            | Self::InvalidPermission => ErrorCategory::Authentication,

            Self::MinTradeRequirementNotMet
            | Self::DustTradeDisallowed
            | Self::OrderNotOpen
            | Self::InvalidOrder
            | Self::InvalidOrderType
            | Self::UuidInvalid
            | Self::QuantityInvalid
            | Self::RateInvalid => ErrorCategory::Order,

            Self::InsufficientFunds
            | Self::InvalidCurrency
            | Self::CurrencyOffline
            | Self::InvalidAddress
            | Self::WithdrawalTooSmall => ErrorCategory::Funds,

            Self::MarketNotProvided
            | Self::QuantityNotProvided
            | Self::RateNotProvided
            | Self::CurrencyNotProvided
            | Self::AddressNotProvided => ErrorCategory::Parameter,

            Self::AddressGenerating => ErrorCategory::Pending,
        }
    }

    /// Returns the message token as the exchange sends it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidMarket => "INVALID_MARKET",
            Self::MarketNotProvided => "MARKET_NOT_PROVIDED",
            Self::MarketOffline => "MARKET_OFFLINE",
            Self::ApiKeyNotProvided => "APIKEY_NOT_PROVIDED",
            Self::ApiKeyInvalid => "APIKEY_INVALID",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::NonceNotProvided => "NONCE_NOT_PROVIDED",
            Self::InvalidPermission => "INVALID_PERMISSION",
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::MinTradeRequirementNotMet => "MIN_TRADE_REQUIREMENT_NOT_MET",
            Self::DustTradeDisallowed => "DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT",
            Self::OrderNotOpen => "ORDER_NOT_OPEN",
            Self::InvalidOrder => "INVALID_ORDER",
            Self::InvalidOrderType => "INVALID_ORDER_TYPE",
            Self::UuidInvalid => "UUID_INVALID",
            Self::QuantityNotProvided => "QUANTITY_NOT_PROVIDED",
            Self::QuantityInvalid => "QUANTITY_INVALID",
            Self::RateNotProvided => "RATE_NOT_PROVIDED",
            Self::RateInvalid => "RATE_INVALID",
            Self::InvalidCurrency => "INVALID_CURRENCY",
            Self::CurrencyNotProvided => "CURRENCY_NOT_PROVIDED",
            Self::CurrencyOffline => "CURRENCY_OFFLINE",
            Self::InvalidAddress => "INVALID_ADDRESS",
            Self::AddressNotProvided => "ADDRESS_NOT_PROVIDED",
            Self::WithdrawalTooSmall => "WITHDRAWAL_TOO_SMALL",
            Self::AddressGenerating => "ADDRESS_GENERATING",
        }
    }

    /// Check if the credentials or signing were rejected
    pub fn is_auth(&self) -> bool {
        self.category() == ErrorCategory::Authentication
    }

    /// Check if the resource is still being prepared server-side
    pub fn is_pending(&self) -> bool {
        self.category() == ErrorCategory::Pending
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw failure message, falling back to [`ErrorCategory::Unknown`]
pub fn categorize(message: &str) -> ErrorCategory {
    ErrorCode::parse(message)
        .map(|code| code.category())
        .unwrap_or(ErrorCategory::Unknown)
}
