//! # Error Types
//!
//! Two error families live here:
//!
//! - [`WalletError`]: the three user-visible outcomes of a failed connect.
//!   Its `Display` string is exactly what the page renders.
//! - [`RpcError`]: failures of the balance lookup against the RPC node.
//!
//! Neither is fatal to the page. The marketing content renders regardless, and
//! a failed connect is only retried when the user clicks again.

use thiserror::Error;

/// Failed wallet connection, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// `window.solana` is missing or does not report `isPhantom`.
    #[error("Phantom wallet is not detected. Please install it.")]
    ProviderNotFound,

    /// The user dismissed the permission prompt (provider error code 4001).
    #[error("You rejected the connection request.")]
    UserRejected,

    /// Anything else the provider threw. The detail is logged, not displayed.
    #[error("Failed to connect to the wallet.")]
    ConnectionFailed(String),
}

/// Balance lookup failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpcError {
    #[error("Unable to fetch balance. Please connect wallet.")]
    NotConnected,

    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("RPC request failed: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("RPC response had neither result nor error")]
    EmptyResponse,
}

impl From<gloo_net::Error> for RpcError {
    fn from(err: gloo_net::Error) -> Self {
        RpcError::Transport(err.to_string())
    }
}

pub type Result<T, E = RpcError> = std::result::Result<T, E>;
