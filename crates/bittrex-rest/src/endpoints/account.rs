//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::request::{ApiRequest, RequestBuilder};
use bittrex_types::Namespace;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    builder: &'a RequestBuilder,
    dispatcher: &'a Dispatcher,
    deadline: Option<Duration>,
}

impl<'a> AccountEndpoints<'a> {
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
        self.builder.private(Namespace::Account, method)
    }

    async fn send(&self, request: ApiRequest) -> RestResult<Value> {
        self.dispatcher.execute(&request, self.deadline).await
    }

    /// Get balances for every currency
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<Value> {
        self.send(self.request("getbalances")?).await
    }

    /// Get the balance of a single currency
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    #[instrument(skip(self))]
    pub async fn get_balance(&self, currency: &str) -> RestResult<Value> {
        let request = self.request("getbalance")?.with_param("currency", currency);
        self.send(request).await
    }

    /// Get or generate the deposit address for a currency
    ///
    /// While the exchange is still generating a fresh address this fails with
    /// `ADDRESS_GENERATING` (see [`RestError::is_address_generating`]).
    /// Use [`get_deposit_address_status`](Self::get_deposit_address_status)
    /// to receive that as a value instead.
    ///
    /// [`RestError::is_address_generating`]: crate::RestError::is_address_generating
    #[instrument(skip(self))]
    pub async fn get_deposit_address(&self, currency: &str) -> RestResult<Value> {
        let request = self
            .request("getdepositaddress")?
            .with_param("currency", currency);
        self.send(request).await
    }

    /// Like [`get_deposit_address`](Self::get_deposit_address), with the
    /// pending state as a value
    #[instrument(skip(self))]
    pub async fn get_deposit_address_status(
        &self,
        currency: &str,
    ) -> RestResult<DepositAddressStatus> {
        match self.get_deposit_address(currency).await {
            Ok(result) => Ok(DepositAddressStatus::Ready(result)),
            Err(e) if e.is_address_generating() => {
                debug!(currency, "Deposit address still generating");
                Ok(DepositAddressStatus::Generating)
            }
            Err(e) => Err(e),
        }
    }

    /// Withdraw funds to an external address
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    /// * `quantity` - Amount to withdraw
    /// * `address` - Destination address
    /// * `payment_id` - Memo / payment id for currencies that need one
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> RestResult<Value> {
        let request = self
            .request("withdraw")?
            .with_param("currency", currency)
            .with_param("quantity", quantity)
            .with_param("address", address)
            .with_optional_param("paymentid", payment_id);
        self.send(request).await
    }

    /// Get a single order by uuid
    #[instrument(skip(self))]
    pub async fn get_order(&self, uuid: &str) -> RestResult<Value> {
        let request = self.request("getorder")?.with_param("uuid", uuid);
        self.send(request).await
    }

    /// Get order history, optionally for a single market
    ///
    /// # Arguments
    /// * `market` - Market filter; `None` or empty returns every market
    #[instrument(skip(self))]
    pub async fn get_order_history(&self, market: Option<&str>) -> RestResult<Value> {
        let request = self
            .request("getorderhistory")?
            .with_optional_param("market", market);
        self.send(request).await
    }

    /// Get withdrawal history, optionally for a single currency
    #[instrument(skip(self))]
    pub async fn get_withdrawal_history(&self, currency: Option<&str>) -> RestResult<Value> {
        let request = self
            .request("getwithdrawalhistory")?
            .with_optional_param("currency", currency);
        self.send(request).await
    }

    /// Get deposit history, optionally for a single currency
    #[instrument(skip(self))]
    pub async fn get_deposit_history(&self, currency: Option<&str>) -> RestResult<Value> {
        let request = self
            .request("getdeposithistory")?
            .with_optional_param("currency", currency);
        self.send(request).await
    }
}

/// Outcome of a deposit address lookup
#[derive(Debug, Clone, PartialEq)]
pub enum DepositAddressStatus {
    /// Address is available; the exchange's result, untouched
    Ready(Value),
    /// The exchange is still generating the address; ask again later
    Generating,
}

impl DepositAddressStatus {
    /// Check if the address is available
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
