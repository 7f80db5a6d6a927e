//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::request::{ApiRequest, RequestBuilder};
use bittrex_types::OrderBookSide;
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

/// Public market data endpoints
pub struct PublicEndpoints<'a> {
    builder: &'a RequestBuilder,
    dispatcher: &'a Dispatcher,
    deadline: Option<Duration>,
}

impl<'a> PublicEndpoints<'a> {
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

    async fn send(&self, request: ApiRequest) -> RestResult<Value> {
        self.dispatcher.execute(&request, self.deadline).await
    }

    /// Get the open and available trading markets along with other metadata
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<Value> {
        self.send(self.builder.public("getmarkets")).await
    }

    /// Get all supported currencies along with other metadata
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Value> {
        self.send(self.builder.public("getcurrencies")).await
    }

    /// Get the current tick values for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, market: &str) -> RestResult<Value> {
        let request = self.builder.public("getticker").with_param("market", market);
        self.send(request).await
    }

    /// Get the last 24 hour summary of all active markets
    #[instrument(skip(self))]
    pub async fn get_market_summaries(&self) -> RestResult<Value> {
        self.send(self.builder.public("getmarketsummaries")).await
    }

    /// Get the last 24 hour summary of a single market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn get_market_summary(&self, market: &str) -> RestResult<Value> {
        let request = self
            .builder
            .public("getmarketsummary")
            .with_param("market", market);
        self.send(request).await
    }

    /// Get the order book for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `side` - Bids, asks, or both
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, market: &str, side: OrderBookSide) -> RestResult<Value> {
        let request = self
            .builder
            .public("getorderbook")
            .with_param("market", market)
            .with_param("type", side);
        self.send(request).await
    }

    /// Get the latest trades that have occurred for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn get_market_history(&self, market: &str) -> RestResult<Value> {
        let request = self
            .builder
            .public("getmarkethistory")
            .with_param("market", market);
        self.send(request).await
    }
}
