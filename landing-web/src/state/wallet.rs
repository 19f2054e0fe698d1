//! Wallet state management

use leptos::prelude::*;

use crate::services::storage::BrowserSessionStorage;
use crate::services::wallet::{get_phantom_address, subscribe_provider_events, PhantomAdapter};
use crate::session::{self, demo_click, observe_connect, DemoClick, WalletSession};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<WalletSession>,
}

impl WalletContext {
    /// Restore from `sessionStorage`; no provider call is made.
    pub fn new() -> Self {
        let store = BrowserSessionStorage::new();
        Self {
            session: RwSignal::new(WalletSession::restore(&store)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|s| s.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.session.with(|s| s.address().map(str::to_string))
    }

    pub fn error_message(&self) -> Option<String> {
        self.session.with(|s| s.error().map(ToString::to_string))
    }

    pub fn button_label(&self) -> String {
        self.session.with(|s| s.button_label())
    }

    /// Ask Phantom for an account. The outcome lands in `session` when the
    /// prompt resolves.
    pub fn connect(&self) {
        let state = self.session;
        leptos::task::spawn_local(async move {
            let store = BrowserSessionStorage::new();
            let outcome = session::connect(&PhantomAdapter, &store).await;
            state.update(|s| s.apply(outcome));
        });
    }

    pub fn disconnect(&self) {
        let store = BrowserSessionStorage::new();
        self.session.update(|s| s.disconnect(&store));
        log::info!("Wallet disconnected");
    }

    pub fn demo_click(&self) -> DemoClick {
        demo_click(&BrowserSessionStorage::new())
    }

    /// Mirror Phantom's own connect/disconnect events into the session.
    fn observe_provider(&self) {
        let state = self.session;
        let ctx = *self;

        let subscribed = subscribe_provider_events(
            move || {
                if let Some(address) = get_phantom_address() {
                    let store = BrowserSessionStorage::new();
                    state.update(|s| observe_connect(s, &store, address));
                }
            },
            move || ctx.disconnect(),
        );

        if !subscribed {
            log::info!("No Phantom provider at mount; skipping event subscription");
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    context.observe_provider();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
