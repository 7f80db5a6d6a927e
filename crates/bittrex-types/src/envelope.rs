//! The response envelope shared by every Bittrex endpoint

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Standard Bittrex API response wrapper
///
/// Every endpoint answers with the same shape:
///
/// ```json
/// {"success": true, "message": "", "result": { ... }}
/// ```
///
/// `result` is only meaningful when `success` is true.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    /// Whether the exchange accepted the request
    pub success: bool,
    /// Failure reason (empty on success)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Result payload, left untouched
    #[serde(default)]
    pub result: Value,
}

impl ApiResponse {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the result, or the server's message if the request failed
    pub fn into_result(self) -> Result<Value, String> {
        if self.success {
            Ok(self.result)
        } else {
            Err(self.message)
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
