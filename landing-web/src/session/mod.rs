//! # Wallet Session
//!
//! Browser-independent core of the connect flow. The Leptos context in
//! [`crate::state::wallet`] drives these functions with the real Phantom
//! adapter and `sessionStorage`; the tests below drive them with scripted
//! stand-ins.
//!
//! ## Lifecycle
//!
//! ```text
//! mount ──restore()──▶ WalletSession { address: stored?, error: None }
//!   click ──connect()──▶ Ok(addr)  ──apply()──▶ address = addr, error = None
//!                    └──▶ Err(e)     ──apply()──▶ error = e (address untouched)
//!   disconnect() ──▶ address = None, stored address removed
//! ```
//!
//! The `hasConnected` flag is written alongside the address on success and is
//! never cleared here; it only feeds the demo gate in [`gate`].

mod gate;
mod store;

pub use gate::{demo_click, has_connected, DemoClick};
pub use store::SessionStore;

#[cfg(test)]
pub use store::MemoryStore;

use shared::utils::display_address;

use crate::error::WalletError;
use crate::utils::constants::{HAS_CONNECTED_KEY, HAS_CONNECTED_VALUE, WALLET_ADDRESS_KEY};

/// Label shown on the header button while no address is known.
pub const CONNECT_LABEL: &str = "Connect Phantom";

/// An injected wallet that can be asked for an account.
#[allow(async_fn_in_trait)]
pub trait WalletAdapter {
    /// Whether the expected provider is present on the page.
    fn is_available(&self) -> bool;

    /// Ask the provider for permission and return the account's public key.
    async fn connect(&self) -> Result<String, WalletError>;
}

/// In-memory wallet state for the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    address: Option<String>,
    error: Option<WalletError>,
}

impl WalletSession {
    /// Rebuild the session from a previous successful connect in this tab.
    pub fn restore(store: &impl SessionStore) -> Self {
        let address = store
            .get(WALLET_ADDRESS_KEY)
            .filter(|address| !address.is_empty());

        if let Some(address) = &address {
            log::info!("Restored wallet session for {}", display_address(address));
        }

        Self {
            address,
            error: None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn error(&self) -> Option<&WalletError> {
        self.error.as_ref()
    }

    /// Text for the header connect button.
    pub fn button_label(&self) -> String {
        match &self.address {
            Some(address) => display_address(address),
            None => CONNECT_LABEL.to_string(),
        }
    }

    /// Fold a connect outcome into the session. Storage is written by
    /// [`connect`] itself, so this only touches memory.
    pub fn apply(&mut self, outcome: Result<String, WalletError>) {
        match outcome {
            Ok(address) => {
                self.address = Some(address);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Forget the address in memory and in storage.
    pub fn disconnect(&mut self, store: &impl SessionStore) {
        self.address = None;
        store.remove(WALLET_ADDRESS_KEY);
    }
}

/// Request a connection from `adapter` and persist the address on success.
///
/// No retries and no timeout; a second call while one is pending issues a
/// second provider request.
pub async fn connect<A, S>(adapter: &A, store: &S) -> Result<String, WalletError>
where
    A: WalletAdapter,
    S: SessionStore,
{
    if !adapter.is_available() {
        log::warn!("Connect requested but no Phantom provider is injected");
        return Err(WalletError::ProviderNotFound);
    }

    let address = adapter.connect().await?;
    if address.is_empty() {
        return Err(WalletError::ConnectionFailed(
            "provider returned an empty public key".to_string(),
        ));
    }

    persist_connection(store, &address);
    log::info!("Wallet connected: {}", display_address(&address));
    Ok(address)
}

/// Record an account reported by the provider's own `connect` event, exactly
/// as a successful [`connect`] would. No permission prompt is involved.
/// Empty keys are ignored.
pub fn observe_connect(session: &mut WalletSession, store: &impl SessionStore, address: String) {
    if address.is_empty() {
        return;
    }
    persist_connection(store, &address);
    log::info!("Provider reported account {}", display_address(&address));
    session.apply(Ok(address));
}

/// Write the address and the `hasConnected` flag.
pub fn persist_connection(store: &impl SessionStore, address: &str) {
    store.set(WALLET_ADDRESS_KEY, address);
    store.set(HAS_CONNECTED_KEY, HAS_CONNECTED_VALUE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    struct ScriptedAdapter {
        available: bool,
        outcome: Result<String, WalletError>,
        calls: Cell<u32>,
    }

    impl ScriptedAdapter {
        fn new(available: bool, outcome: Result<String, WalletError>) -> Self {
            Self {
                available,
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl WalletAdapter for ScriptedAdapter {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn connect(&self) -> Result<String, WalletError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn run_connect(adapter: &ScriptedAdapter, store: &MemoryStore) -> WalletSession {
        let mut session = WalletSession::restore(store);
        let outcome = block_on(connect(adapter, store));
        session.apply(outcome);
        session
    }

    #[test]
    fn test_missing_provider_reports_not_detected() {
        let store = MemoryStore::default();
        let adapter = ScriptedAdapter::new(false, Ok(ADDR.to_string()));

        let session = run_connect(&adapter, &store);

        assert_eq!(session.error(), Some(&WalletError::ProviderNotFound));
        assert_eq!(
            session.error().map(ToString::to_string).as_deref(),
            Some("Phantom wallet is not detected. Please install it.")
        );
        assert_eq!(session.address(), None);
        assert_eq!(adapter.calls.get(), 0);
        assert_eq!(store.get(WALLET_ADDRESS_KEY), None);
    }

    #[test]
    fn test_successful_connect_stores_and_truncates() {
        let store = MemoryStore::default();
        let adapter = ScriptedAdapter::new(true, Ok(ADDR.to_string()));

        let session = run_connect(&adapter, &store);

        assert_eq!(session.address(), Some(ADDR));
        assert!(session.is_connected());
        assert_eq!(session.error(), None);
        assert_eq!(session.button_label(), "8W6Qgi...JKAL");
        assert_eq!(store.get(WALLET_ADDRESS_KEY).as_deref(), Some(ADDR));
        assert_eq!(store.get(HAS_CONNECTED_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_rejection_uses_rejection_message() {
        let store = MemoryStore::default();
        let adapter = ScriptedAdapter::new(true, Err(WalletError::UserRejected));

        let session = run_connect(&adapter, &store);

        let message = session.error().map(ToString::to_string);
        assert_eq!(message.as_deref(), Some("You rejected the connection request."));
        assert_ne!(message.as_deref(), Some("Failed to connect to the wallet."));
        assert_eq!(session.address(), None);
        assert!(!has_connected(&store));
    }

    #[test]
    fn test_other_failure_uses_generic_message() {
        let store = MemoryStore::default();
        let adapter = ScriptedAdapter::new(
            true,
            Err(WalletError::ConnectionFailed("locked".to_string())),
        );

        let session = run_connect(&adapter, &store);

        assert_eq!(
            session.error().map(ToString::to_string).as_deref(),
            Some("Failed to connect to the wallet.")
        );
    }

    #[test]
    fn test_empty_public_key_is_a_failure() {
        let store = MemoryStore::default();
        let adapter = ScriptedAdapter::new(true, Ok(String::new()));

        let session = run_connect(&adapter, &store);

        assert!(matches!(session.error(), Some(WalletError::ConnectionFailed(_))));
        assert_eq!(session.address(), None);
        assert_eq!(store.get(WALLET_ADDRESS_KEY), None);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let store = MemoryStore::default();
        let mut session = WalletSession::default();
        session.apply(Err(WalletError::UserRejected));

        let adapter = ScriptedAdapter::new(true, Ok(ADDR.to_string()));
        session.apply(block_on(connect(&adapter, &store)));

        assert_eq!(session.error(), None);
        assert_eq!(session.address(), Some(ADDR));
    }

    #[test]
    fn test_failure_keeps_existing_address() {
        let store = MemoryStore::default();
        persist_connection(&store, ADDR);
        let mut session = WalletSession::restore(&store);

        let adapter = ScriptedAdapter::new(true, Err(WalletError::UserRejected));
        session.apply(block_on(connect(&adapter, &store)));

        assert_eq!(session.address(), Some(ADDR));
        assert_eq!(session.error(), Some(&WalletError::UserRejected));
    }

    #[test]
    fn test_reload_restores_without_connect() {
        let store = MemoryStore::default();
        let adapter = ScriptedAdapter::new(true, Ok(ADDR.to_string()));
        run_connect(&adapter, &store);
        assert_eq!(adapter.calls.get(), 1);

        let reloaded = WalletSession::restore(&store);

        assert_eq!(reloaded.address(), Some(ADDR));
        assert_eq!(reloaded.button_label(), "8W6Qgi...JKAL");
        assert_eq!(adapter.calls.get(), 1);
    }

    #[test]
    fn test_restore_ignores_empty_value() {
        let store = MemoryStore::default();
        store.set(WALLET_ADDRESS_KEY, "");

        let session = WalletSession::restore(&store);

        assert_eq!(session.address(), None);
        assert_eq!(session.button_label(), CONNECT_LABEL);
    }

    #[test]
    fn test_demo_gate_follows_first_success() {
        let store = MemoryStore::default();
        assert_eq!(demo_click(&store), DemoClick::ShowDialog);

        let rejected = ScriptedAdapter::new(true, Err(WalletError::UserRejected));
        run_connect(&rejected, &store);
        assert_eq!(demo_click(&store), DemoClick::ShowDialog);

        let accepted = ScriptedAdapter::new(true, Ok(ADDR.to_string()));
        run_connect(&accepted, &store);
        assert_eq!(demo_click(&store), DemoClick::Navigate);
    }

    #[test]
    fn test_provider_connect_event_records_account() {
        let store = MemoryStore::default();
        let mut session = WalletSession::restore(&store);
        session.apply(Err(WalletError::UserRejected));

        observe_connect(&mut session, &store, ADDR.to_string());

        assert_eq!(session.address(), Some(ADDR));
        assert_eq!(session.error(), None);
        assert_eq!(store.get(WALLET_ADDRESS_KEY).as_deref(), Some(ADDR));
        assert_eq!(demo_click(&store), DemoClick::Navigate);
        assert_eq!(WalletSession::restore(&store).address(), Some(ADDR));
    }

    #[test]
    fn test_provider_connect_event_ignores_empty_key() {
        let store = MemoryStore::default();
        let mut session = WalletSession::default();

        observe_connect(&mut session, &store, String::new());

        assert_eq!(session.address(), None);
        assert_eq!(store.get(WALLET_ADDRESS_KEY), None);
        assert!(!has_connected(&store));
    }

    #[test]
    fn test_disconnect_clears_address_but_not_flag() {
        let store = MemoryStore::default();
        let adapter = ScriptedAdapter::new(true, Ok(ADDR.to_string()));
        let mut session = run_connect(&adapter, &store);

        session.disconnect(&store);

        assert_eq!(session.address(), None);
        assert_eq!(session.button_label(), CONNECT_LABEL);
        assert_eq!(store.get(WALLET_ADDRESS_KEY), None);
        assert!(has_connected(&store));
        assert_eq!(demo_click(&store), DemoClick::Navigate);
    }
}
