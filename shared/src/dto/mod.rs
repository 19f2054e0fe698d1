//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the services the landing page talks to. The page has no
//! backend of its own, so the only DTOs are the JSON-RPC envelopes used for
//! the balance lookup against a hosted Solana RPC node.
//!
//! ## Module Organization
//!
//! - [`rpc`] - JSON-RPC 2.0 envelopes and the `getBalance` result
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST https://api.devnet.solana.com
//! Content-Type: application/json
//!
//! {
//!   "jsonrpc": "2.0",
//!   "id": 1,
//!   "method": "getBalance",
//!   "params": ["8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL", {"commitment": "confirmed"}]
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "jsonrpc": "2.0",
//!   "result": { "context": { "slot": 1 }, "value": 1500000000 },
//!   "id": 1
//! }
//! ```

pub mod rpc;

pub use rpc::*;
