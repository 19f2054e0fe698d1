//! # Shared Types for the AIGuardian Landing Page
//!
//! Target-independent pieces used by the `landing-web` WASM crate. Nothing in
//! here touches browser APIs, so everything can be unit tested natively.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for external services
//!   - **[`dto::rpc`]**: Solana JSON-RPC `getBalance` request/response
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::display_address`]**: The `first6...last4` form used in the header
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::rpc::RpcRequest;
//! use shared::utils::display_address;
//!
//! let request = RpcRequest::get_balance(1, "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL");
//! assert_eq!(request.method, "getBalance");
//!
//! let label = display_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL");
//! assert_eq!(label, "8W6Qgi...JKAL");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
