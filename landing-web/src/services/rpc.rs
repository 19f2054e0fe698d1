//! Balance lookup against a hosted Solana JSON-RPC node.

use gloo_net::http::Request;
use shared::dto::rpc::{BalanceResult, RpcRequest, RpcResponse};

use crate::error::{Result, RpcError};

/// Length in bytes of a decoded Solana public key.
pub const PUBKEY_LEN: usize = 32;

/// Check that `address` is base58 and decodes to a 32-byte public key.
pub fn validate_address(address: &str) -> Result<()> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| RpcError::InvalidAddress(e.to_string()))?;

    if bytes.len() != PUBKEY_LEN {
        return Err(RpcError::InvalidAddress(format!(
            "expected {} bytes, got {}",
            PUBKEY_LEN,
            bytes.len()
        )));
    }
    Ok(())
}

/// Turn a `getBalance` response into SOL.
pub fn balance_from_response(response: RpcResponse<BalanceResult>) -> Result<f64> {
    match (response.result, response.error) {
        (_, Some(err)) => Err(RpcError::Rpc {
            code: err.code,
            message: err.message,
        }),
        (Some(result), None) => Ok(result.sol()),
        (None, None) => Err(RpcError::EmptyResponse),
    }
}

/// Fetch the SOL balance of `address` from `endpoint`.
pub async fn get_balance(endpoint: &str, address: &str) -> Result<f64> {
    validate_address(address)?;

    let response = Request::post(endpoint)
        .json(&RpcRequest::get_balance(1, address))?
        .send()
        .await?;

    if !response.ok() {
        return Err(RpcError::Transport(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let body = response.json::<RpcResponse<BalanceResult>>().await?;
    balance_from_response(body)
}
