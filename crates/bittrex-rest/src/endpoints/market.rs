//! Private order endpoints
//!
//! These endpoints require authentication.
//!
//! Placing and cancelling orders is not idempotent. After a transport error
//! the order may or may not exist, so check with `get_open_orders` or
//! `get_order` before sending it again.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::request::{ApiRequest, RequestBuilder};
use bittrex_types::Namespace;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

/// Private order endpoints
pub struct MarketEndpoints<'a> {
    builder: &'a RequestBuilder,
    dispatcher: &'a Dispatcher,
    deadline: Option<Duration>,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(builder: &'a RequestBuilder, dispatcher: &'a Dispatcher) -> Self {
        Self {
            builder,
            dispatcher,
            deadline: None,
        }
    }

    /// Bound every call made through these endpoints by `deadline`
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn request(&self, method: &str) -> RestResult<ApiRequest> {
        self.builder.private(Namespace::Market, method)
    }

    async fn send(&self, request: ApiRequest) -> RestResult<Value> {
        self.dispatcher.execute(&request, self.deadline).await
    }

    /// Place a limit buy order
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `quantity` - Amount to purchase
    /// * `rate` - Price per unit
    ///
    /// # Returns
    /// The exchange's result, which carries the order `uuid`
    #[instrument(skip(self))]
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<Value> {
        let request = self
            .request("buylimit")?
            .with_param("market", market)
            .with_param("quantity", quantity)
            .with_param("rate", rate);
        self.send(request).await
    }

    /// Place a limit sell order
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `quantity` - Amount to sell
    /// * `rate` - Price per unit
    #[instrument(skip(self))]
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<Value> {
        let request = self
            .request("selllimit")?
            .with_param("market", market)
            .with_param("quantity", quantity)
            .with_param("rate", rate);
        self.send(request).await
    }

    /// Cancel a buy or sell order
    ///
    /// # Arguments
    /// * `uuid` - Order uuid returned when the order was placed
    #[instrument(skip(self))]
    pub async fn cancel(&self, uuid: &str) -> RestResult<Value> {
        let request = self.request("cancel")?.with_param("uuid", uuid);
        self.send(request).await
    }

    /// Get all open orders, optionally for a single market
    ///
    /// # Arguments
    /// * `market` - Market filter; `None` or empty returns every market
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, market: Option<&str>) -> RestResult<Value> {
        let request = self
            .request("getopenorders")?
            .with_optional_param("market", market);
        self.send(request).await
    }
}
