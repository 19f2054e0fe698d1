//! Application constants

/// Session storage key holding the connected wallet address.
pub const WALLET_ADDRESS_KEY: &str = "walletAddress";

/// Session storage key set to `"true"` once any connect has succeeded in this tab.
pub const HAS_CONNECTED_KEY: &str = "hasConnected";

pub const HAS_CONNECTED_VALUE: &str = "true";

// Routes
pub const HOME_ROUTE: &str = "/";
pub const DEMO_ROUTE: &str = "/demo";

// External links
pub const GITHUB_URL: &str = "https://github.com/kens1ang/AIGuardian/tree/master";
pub const HACKATHON_URL: &str = "https://www.2024.ethkl.org/";

const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Solana RPC endpoint, overridable at build time with `LANDING_RPC_URL`.
pub fn rpc_url() -> &'static str {
    option_env!("LANDING_RPC_URL").unwrap_or(DEFAULT_RPC_URL)
}
