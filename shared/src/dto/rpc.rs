//! Solana JSON-RPC envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Commitment level used for balance reads.
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Build a `getBalance` call for `address` at [`DEFAULT_COMMITMENT`].
    pub fn get_balance(id: u64, address: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: "getBalance".to_string(),
            params: vec![
                Value::String(address.to_string()),
                json!({ "commitment": DEFAULT_COMMITMENT }),
            ],
        }
    }
}

/// JSON-RPC 2.0 response envelope. Exactly one of `result` / `error` is set
/// by a conforming node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    pub jsonrpc: String,
    /// `null` when the node could not read the request id.
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

/// Error member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcContext {
    pub slot: u64,
}

/// `getBalance` result: the balance in lamports at `context.slot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    pub context: RpcContext,
    pub value: u64,
}

impl BalanceResult {
    pub fn sol(&self) -> f64 {
        lamports_to_sol(self.value)
    }
}

/// Convert lamports to SOL.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_balance_request_shape() {
        let req = RpcRequest::get_balance(7, "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "getBalance",
                "params": [
                    "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
                    { "commitment": "confirmed" }
                ]
            })
        );
    }

    #[test]
    fn test_parse_balance_response() {
        let body = r#"{"jsonrpc":"2.0","result":{"context":{"slot":341},"value":1500000000},"id":1}"#;
        let resp: RpcResponse<BalanceResult> = serde_json::from_str(body).unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result.context.slot, 341);
        assert_eq!(result.value, 1_500_000_000);
        assert_eq!(result.sol(), 1.5);
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param: WrongSize"},"id":1}"#;
        let resp: RpcResponse<BalanceResult> = serde_json::from_str(body).unwrap();
        assert!(resp.result.is_none());
        assert_eq!(
            resp.error,
            Some(RpcErrorObject {
                code: -32602,
                message: "Invalid param: WrongSize".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_error_response_with_null_id() {
        let body = r#"{"jsonrpc":"2.0","error":{"code":-32700,"message":"Parse error"},"id":null}"#;
        let resp: RpcResponse<BalanceResult> = serde_json::from_str(body).unwrap();
        assert_eq!(resp.id, None);
        assert_eq!(resp.error.map(|e| e.code), Some(-32700));
    }

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(0), 0.0);
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
        assert_eq!(lamports_to_sol(250_000_000), 0.25);
    }
}
