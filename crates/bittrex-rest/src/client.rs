//! Main REST client implementation

use crate::dispatch::Dispatcher;
use crate::endpoints::{AccountEndpoints, DepositAddressStatus, MarketEndpoints, PublicEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::RequestBuilder;
use crate::transport::{HttpTransport, ReqwestTransport};
use bittrex_auth::Credentials;
use bittrex_types::OrderBookSide;
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default exchange host
pub const DEFAULT_HOST: &str = "https://bittrex.com";

/// Default API version
pub const DEFAULT_API_VERSION: &str = "v1.1";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bittrex REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap
/// and clones share the transport and the nonce generator.
///
/// # Example
///
/// ```no_run
/// use bittrex_rest::{BittrexClient, Credentials};
/// use rust_decimal_macros::dec;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BittrexClient::new()?;
///     let ticker = client.get_ticker("BTC-LTC").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::new("api-key", "api-secret")?;
///     let auth_client = BittrexClient::with_credentials(creds)?;
///     let order = auth_client.buy_limit("BTC-LTC", dec!(10), dec!(0.0001)).await?;
///     auth_client.cancel(order["uuid"].as_str().unwrap_or_default()).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BittrexClient {
    builder: RequestBuilder,
    dispatcher: Dispatcher,
}

impl BittrexClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("bittrex-rest/{}", env!("CARGO_PKG_VERSION")));
        let transport =
            ReqwestTransport::new(Duration::from_secs(config.timeout_secs), &user_agent)?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a new client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = config.base_url();
        let builder = RequestBuilder::new(base_url.clone(), config.credentials.clone());
        let dispatcher = Dispatcher::new(transport, config.credentials);

        info!(
            %base_url,
            authenticated = builder.credentials().is_some(),
            "Created Bittrex REST client"
        );

        Self {
            builder,
            dispatcher,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.builder.credentials().is_some()
    }

    /// Base URL all endpoints hang off
    pub fn base_url(&self) -> &str {
        self.builder.base_url()
    }

    /// The request builder, for composing requests by hand
    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// The dispatcher, for sending hand-built requests
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // Public Endpoints
    // ========================================================================

    /// Get public endpoints
    pub fn public(&self) -> PublicEndpoints<'_> {
        PublicEndpoints::new(&self.builder, &self.dispatcher)
    }

    /// Get the open and available trading markets
    pub async fn get_markets(&self) -> RestResult<Value> {
        self.public().get_markets().await
    }

    /// Get all supported currencies
    pub async fn get_currencies(&self) -> RestResult<Value> {
        self.public().get_currencies().await
    }

    /// Get the current tick values for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    pub async fn get_ticker(&self, market: &str) -> RestResult<Value> {
        self.public().get_ticker(market).await
    }

    /// Get the last 24 hour summary of all active markets
    pub async fn get_market_summaries(&self) -> RestResult<Value> {
        self.public().get_market_summaries().await
    }

    /// Get the last 24 hour summary of a market
    pub async fn get_market_summary(&self, market: &str) -> RestResult<Value> {
        self.public().get_market_summary(market).await
    }

    /// Get the order book for a market
    pub async fn get_order_book(&self, market: &str, side: OrderBookSide) -> RestResult<Value> {
        self.public().get_order_book(market, side).await
    }

    /// Get the latest trades for a market
    pub async fn get_market_history(&self, market: &str) -> RestResult<Value> {
        self.public().get_market_history(market).await
    }

    // ========================================================================
    // Private Market Endpoints
    // ========================================================================

    /// Get order endpoints (requires credentials)
    pub fn market(&self) -> RestResult<MarketEndpoints<'_>> {
        self.require_credentials()?;
        Ok(MarketEndpoints::new(&self.builder, &self.dispatcher))
    }

    /// Place a limit buy order
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<Value> {
        self.market()?.buy_limit(market, quantity, rate).await
    }

    /// Place a limit sell order
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<Value> {
        self.market()?.sell_limit(market, quantity, rate).await
    }

    /// Cancel an order by uuid
    pub async fn cancel(&self, uuid: &str) -> RestResult<Value> {
        self.market()?.cancel(uuid).await
    }

    /// Get open orders, optionally for a single market
    pub async fn get_open_orders(&self, market: Option<&str>) -> RestResult<Value> {
        self.market()?.get_open_orders(market).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(&self.builder, &self.dispatcher))
    }

    /// Get balances for every currency
    pub async fn get_balances(&self) -> RestResult<Value> {
        self.account()?.get_balances().await
    }

    /// Get the balance of a currency
    pub async fn get_balance(&self, currency: &str) -> RestResult<Value> {
        self.account()?.get_balance(currency).await
    }

    /// Get or generate the deposit address for a currency
    pub async fn get_deposit_address(&self, currency: &str) -> RestResult<Value> {
        self.account()?.get_deposit_address(currency).await
    }

    /// Get the deposit address, reporting generation in progress as a value
    pub async fn get_deposit_address_status(
        &self,
        currency: &str,
    ) -> RestResult<DepositAddressStatus> {
        self.account()?.get_deposit_address_status(currency).await
    }

    /// Withdraw funds to an external address
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> RestResult<Value> {
        self.account()?
            .withdraw(currency, quantity, address, payment_id)
            .await
    }

    /// Get a single order by uuid
    pub async fn get_order(&self, uuid: &str) -> RestResult<Value> {
        self.account()?.get_order(uuid).await
    }

    /// Get order history, optionally for a single market
    pub async fn get_order_history(&self, market: Option<&str>) -> RestResult<Value> {
        self.account()?.get_order_history(market).await
    }

    /// Get withdrawal history, optionally for a single currency
    pub async fn get_withdrawal_history(&self, currency: Option<&str>) -> RestResult<Value> {
        self.account()?.get_withdrawal_history(currency).await
    }

    /// Get deposit history, optionally for a single currency
    pub async fn get_deposit_history(&self, currency: Option<&str>) -> RestResult<Value> {
        self.account()?.get_deposit_history(currency).await
    }

    fn require_credentials(&self) -> RestResult<()> {
        if self.has_credentials() {
            Ok(())
        } else {
            Err(RestError::AuthRequired)
        }
    }
}

impl std::fmt::Debug for BittrexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexClient")
            .field("base_url", &self.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API version path segment
    pub api_version: String,
    /// Exchange host, scheme included
    pub host: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set host (e.g., a local test server)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Base URL derived from host and version
    pub fn base_url(&self) -> String {
        format!("{}/api/{}", self.host.trim_end_matches('/'), self.api_version)
    }
}
