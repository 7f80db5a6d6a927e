//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes documented for the Bittrex v1.1 API.

#![allow(dead_code)]

use bittrex_rest::{BittrexClient, ClientConfig, Credentials, MockTransport, RecordedRequest};
use std::sync::Arc;

pub const API_KEY: &str = "4b0c8a5e9d7f4e2aa1c3";
pub const API_SECRET: &str = "d1e2f3a4b5c6d7e8f9a0";

/// Sample `getticker` response
pub const TICKER_RESPONSE: &str = r#"{
    "success": true,
    "message": "",
    "result": {
        "Bid": 2.05670368,
        "Ask": 3.35579531,
        "Last": 3.35579531
    }
}"#;

/// Sample `getbalances` response
pub const BALANCES_RESPONSE: &str = r#"{
    "success": true,
    "message": "",
    "result": [
        {
            "Currency": "DOGE",
            "Balance": 0.0,
            "Available": 0.0,
            "Pending": 0.0,
            "CryptoAddress": "DLxcEt3AatMyr2NTatzjsfHNoB9NT62HiF",
            "Requested": false,
            "Uuid": null
        },
        {
            "Currency": "BTC",
            "Balance": 14.21549076,
            "Available": 14.21549076,
            "Pending": 0.0,
            "CryptoAddress": "1Mrcdr6715hjda34pdXuLqXcju6qgwHA31",
            "Requested": false,
            "Uuid": null
        }
    ]
}"#;

/// Sample `buylimit` response
pub const BUY_LIMIT_RESPONSE: &str = r#"{
    "success": true,
    "message": "",
    "result": {
        "uuid": "e606d53c-8d70-11e3-94b5-425861b86ab6"
    }
}"#;

/// Sample `cancel` response
pub const CANCEL_RESPONSE: &str = r#"{
    "success": true,
    "message": "",
    "result": null
}"#;

/// Failure for an unknown market
pub const INVALID_MARKET_RESPONSE: &str = r#"{
    "success": false,
    "message": "INVALID_MARKET",
    "result": null
}"#;

/// Failure while a deposit address is being generated
pub const ADDRESS_GENERATING_RESPONSE: &str = r#"{
    "success": false,
    "message": "ADDRESS_GENERATING",
    "result": null
}"#;

/// Empty list result
pub const EMPTY_LIST_RESPONSE: &str = r#"{"success": true, "message": "", "result": []}"#;

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

/// Queue `body` as a 200 response
pub fn respond(transport: &MockTransport, body: &str) {
    transport.push_response(200, body);
}

/// Nonce carried by a private request
pub fn nonce(request: &RecordedRequest) -> u64 {
    request.query_param("nonce").unwrap().parse().unwrap()
}

/// Authenticated client over a fresh mock transport
pub fn private_client() -> (BittrexClient, Arc<MockTransport>) {
    client_over(MockTransport::new(), Some(credentials()))
}

/// Public-only client over a fresh mock transport
pub fn public_client() -> (BittrexClient, Arc<MockTransport>) {
    client_over(MockTransport::new(), None)
}

pub fn client_over(
    transport: MockTransport,
    credentials: Option<Credentials>,
) -> (BittrexClient, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let mut config = ClientConfig::new();
    if let Some(credentials) = credentials {
        config = config.with_credentials(credentials);
    }
    let client = BittrexClient::with_transport(config, transport.clone());
    (client, transport)
}
