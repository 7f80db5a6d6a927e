//! Integration tests for the Bittrex REST client
//!
//! Every test runs against a mock transport; nothing touches the network.

mod common;

use bittrex_rest::{
    BittrexClient, ClientConfig, Credentials, DepositAddressStatus, ErrorCategory, ErrorCode,
    MockTransport, OrderBookSide, RestError,
};
use common::*;
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const BASE: &str = "https://bittrex.com/api/v1.1";

// ============================================================================
// Public endpoints
// ============================================================================

#[tokio::test]
async fn test_public_endpoint_paths() {
    let (client, transport) = public_client();
    for _ in 0..7 {
        respond(&transport, EMPTY_LIST_RESPONSE);
    }

    client.get_markets().await.unwrap();
    client.get_currencies().await.unwrap();
    client.get_ticker("BTC-LTC").await.unwrap();
    client.get_market_summaries().await.unwrap();
    client.get_market_summary("BTC-LTC").await.unwrap();
    client.get_order_book("BTC-LTC", OrderBookSide::Buy).await.unwrap();
    client.get_market_history("BTC-LTC").await.unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        [
            format!("{BASE}/public/getmarkets"),
            format!("{BASE}/public/getcurrencies"),
            format!("{BASE}/public/getticker?market=BTC-LTC"),
            format!("{BASE}/public/getmarketsummaries"),
            format!("{BASE}/public/getmarketsummary?market=BTC-LTC"),
            format!("{BASE}/public/getorderbook?market=BTC-LTC&type=buy"),
            format!("{BASE}/public/getmarkethistory?market=BTC-LTC"),
        ]
    );
}

#[tokio::test]
async fn test_public_requests_are_never_signed() {
    // Credentials present, but public calls still go out bare
    let (client, transport) = private_client();
    respond(&transport, TICKER_RESPONSE);
    respond(&transport, EMPTY_LIST_RESPONSE);

    client.get_ticker("BTC-LTC").await.unwrap();
    client.get_markets().await.unwrap();

    for request in transport.requests() {
        assert!(request.header("apisign").is_none());
        assert!(request.query_param("apiKey").is_none());
        assert!(request.query_param("nonce").is_none());
    }
}

#[tokio::test]
async fn test_ticker_result_untouched() {
    let (client, transport) = public_client();
    respond(&transport, TICKER_RESPONSE);

    let ticker = client.get_ticker("BTC-LTC").await.unwrap();
    assert_eq!(
        ticker,
        json!({"Bid": 2.05670368, "Ask": 3.35579531, "Last": 3.35579531})
    );
}

#[tokio::test]
async fn test_invalid_market_failure() {
    let (client, transport) = public_client();
    respond(&transport, INVALID_MARKET_RESPONSE);

    let err = client.get_ticker("NOPE-NOPE").await.unwrap_err();
    match &err {
        RestError::Api { url, message, code } => {
            assert_eq!(url, &format!("{BASE}/public/getticker"));
            assert_eq!(message, "INVALID_MARKET");
            assert_eq!(*code, Some(ErrorCode::InvalidMarket));
        }
        other => panic!("expected Api error, got {:?}", other),
    }

    let text = err.to_string();
    assert!(text.contains("getticker"));
    assert!(text.contains("INVALID_MARKET"));
    assert_eq!(err.category(), Some(ErrorCategory::Market));
}

#[tokio::test]
async fn test_http_status_is_transport_error() {
    let (client, transport) = public_client();
    transport.push_response(502, "<html>Bad Gateway</html>");

    let err = client.get_markets().await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_api_failure());
    assert!(matches!(err, RestError::Status { status: 502, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let (client, transport) = public_client();
    respond(&transport, "not json at all");

    let err = client.get_markets().await.unwrap_err();
    assert!(matches!(err, RestError::Parse(_)));
}

// ============================================================================
// Private endpoints
// ============================================================================

#[tokio::test]
async fn test_private_endpoint_paths() {
    let (client, transport) = private_client();
    for _ in 0..12 {
        respond(&transport, EMPTY_LIST_RESPONSE);
    }

    client.buy_limit("BTC-LTC", dec!(1), dec!(0.01)).await.unwrap();
    client.sell_limit("BTC-LTC", dec!(1), dec!(0.02)).await.unwrap();
    client.cancel("abc").await.unwrap();
    client.get_open_orders(None).await.unwrap();
    client.get_balances().await.unwrap();
    client.get_balance("BTC").await.unwrap();
    client.get_deposit_address("BTC").await.unwrap();
    client
        .withdraw("BTC", dec!(0.1), "1BoatSLRHtKNngkdXEeobR76b53LETtpyT", None)
        .await
        .unwrap();
    client.get_order("abc").await.unwrap();
    client.get_order_history(None).await.unwrap();
    client.get_withdrawal_history(None).await.unwrap();
    client.get_deposit_history(None).await.unwrap();

    let paths: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| r.path().trim_start_matches(BASE).to_string())
        .collect();
    assert_eq!(
        paths,
        [
            "/market/buylimit",
            "/market/selllimit",
            "/market/cancel",
            "/market/getopenorders",
            "/account/getbalances",
            "/account/getbalance",
            "/account/getdepositaddress",
            "/account/withdraw",
            "/account/getorder",
            "/account/getorderhistory",
            "/account/getwithdrawalhistory",
            "/account/getdeposithistory",
        ]
    );
}

#[tokio::test]
async fn test_private_requests_carry_auth() {
    let (client, transport) = private_client();
    respond(&transport, BALANCES_RESPONSE);
    respond(&transport, EMPTY_LIST_RESPONSE);

    client.get_balances().await.unwrap();
    client.get_open_orders(Some("BTC-LTC")).await.unwrap();

    for request in transport.requests() {
        let keys = request.query_keys();
        assert_eq!(&keys[..2], ["apiKey", "nonce"]);
        assert_eq!(request.query_param("apiKey").as_deref(), Some(API_KEY));

        // Signature covers the exact URI that went out
        let expected = credentials().sign(&request.url);
        assert_eq!(request.header("apisign"), Some(expected.as_str()));
        assert_eq!(expected.len(), 128);
    }
}

#[tokio::test]
async fn test_nonces_strictly_increase() {
    let (client, transport) = private_client();
    let clone = client.clone();
    for _ in 0..20 {
        respond(&transport, EMPTY_LIST_RESPONSE);
    }

    for _ in 0..10 {
        client.get_balances().await.unwrap();
        clone.get_order_history(None).await.unwrap();
    }

    let nonces: Vec<u64> = transport.requests().iter().map(nonce).collect();
    assert!(nonces.windows(2).all(|w| w[0] < w[1]), "{:?}", nonces);
}

#[tokio::test]
async fn test_optional_filters_omitted() {
    let (client, transport) = private_client();
    for _ in 0..4 {
        respond(&transport, EMPTY_LIST_RESPONSE);
    }

    client.get_open_orders(None).await.unwrap();
    client.get_order_history(Some("")).await.unwrap();
    client.get_withdrawal_history(None).await.unwrap();
    client.get_deposit_history(Some("BTC")).await.unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].query_keys(), ["apiKey", "nonce"]);
    assert_eq!(sent[1].query_keys(), ["apiKey", "nonce"]);
    assert_eq!(sent[2].query_keys(), ["apiKey", "nonce"]);
    assert_eq!(sent[3].query_keys(), ["apiKey", "nonce", "currency"]);
}

#[tokio::test]
async fn test_balances_result_untouched() {
    let (client, transport) = private_client();
    respond(&transport, BALANCES_RESPONSE);

    let balances = client.get_balances().await.unwrap();
    let entries = balances.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["Currency"], "BTC");
    assert_eq!(entries[1]["Balance"], json!(14.21549076));
    assert!(entries[0]["Uuid"].is_null());
}

#[tokio::test]
async fn test_buy_then_cancel() {
    let (client, transport) = private_client();
    respond(&transport, BUY_LIMIT_RESPONSE);
    respond(&transport, CANCEL_RESPONSE);

    let order = client
        .buy_limit("BTC-LTC", dec!(10), dec!(0.0001))
        .await
        .unwrap();
    let uuid = order["uuid"].as_str().unwrap();
    assert_eq!(uuid, "e606d53c-8d70-11e3-94b5-425861b86ab6");

    let cancelled = client.cancel(uuid).await.unwrap();
    assert!(cancelled.is_null());

    let sent = transport.requests();
    assert_eq!(
        sent[0].query_keys(),
        ["apiKey", "nonce", "market", "quantity", "rate"]
    );
    assert_eq!(sent[0].query_param("market").as_deref(), Some("BTC-LTC"));
    assert_eq!(sent[0].query_param("quantity").as_deref(), Some("10"));
    assert_eq!(sent[0].query_param("rate").as_deref(), Some("0.0001"));
    assert_eq!(sent[1].query_keys(), ["apiKey", "nonce", "uuid"]);
    assert_eq!(sent[1].query_param("uuid").as_deref(), Some(uuid));
}

#[tokio::test]
async fn test_withdraw_payment_id() {
    let (client, transport) = private_client();
    respond(&transport, BUY_LIMIT_RESPONSE);

    client
        .withdraw(
            "XMR",
            dec!(1.25),
            "4AdUndXHHZ6cfufTMvppY6JwXNouMBzSkbLYfpAV5Usx",
            Some("pid-1"),
        )
        .await
        .unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.query_keys(),
        ["apiKey", "nonce", "currency", "quantity", "address", "paymentid"]
    );
    assert_eq!(sent.query_param("quantity").as_deref(), Some("1.25"));
}

#[tokio::test]
async fn test_deposit_address_generating() {
    let (client, transport) = private_client();
    respond(&transport, ADDRESS_GENERATING_RESPONSE);
    respond(&transport, ADDRESS_GENERATING_RESPONSE);

    let err = client.get_deposit_address("VTC").await.unwrap_err();
    assert!(err.is_address_generating());
    assert_eq!(err.code(), Some(ErrorCode::AddressGenerating));

    let status = client.get_deposit_address_status("VTC").await.unwrap();
    assert_eq!(status, DepositAddressStatus::Generating);
}

// ============================================================================
// Authentication and deadlines
// ============================================================================

#[tokio::test]
async fn test_private_call_without_credentials() {
    let (client, transport) = public_client();

    let err = client.get_balances().await.unwrap_err();
    assert!(matches!(err, RestError::AuthRequired));

    let err = client.buy_limit("BTC-LTC", dec!(1), dec!(1)).await.unwrap_err();
    assert!(matches!(err, RestError::AuthRequired));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_deadline_expires() {
    let (client, transport) = client_over(
        MockTransport::new().with_delay(Duration::from_millis(500)),
        Some(credentials()),
    );
    respond(&transport, BALANCES_RESPONSE);

    let err = client
        .account()
        .unwrap()
        .with_deadline(Duration::from_millis(20))
        .get_balances()
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::Timeout(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_deadline_not_reached() {
    let (client, transport) = client_over(
        MockTransport::new().with_delay(Duration::from_millis(5)),
        None,
    );
    respond(&transport, TICKER_RESPONSE);

    let ticker = client
        .public()
        .with_deadline(Duration::from_secs(5))
        .get_ticker("BTC-LTC")
        .await
        .unwrap();
    assert_eq!(ticker["Last"], json!(3.35579531));
}

#[tokio::test]
async fn test_custom_host_and_version() {
    let transport = Arc::new(MockTransport::new());
    respond(&transport, EMPTY_LIST_RESPONSE);

    let config = ClientConfig::new()
        .with_host("http://127.0.0.1:9000/")
        .with_api_version("v1.0")
        .with_credentials(Credentials::new("k", "s").unwrap());
    let client = BittrexClient::with_transport(config, transport.clone());

    client.get_markets().await.unwrap();
    assert_eq!(
        transport.last_request().unwrap().url,
        "http://127.0.0.1:9000/api/v1.0/public/getmarkets"
    );
}
