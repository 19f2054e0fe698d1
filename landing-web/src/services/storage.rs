//! `sessionStorage` backed [`SessionStore`].

use web_sys::Storage;

use crate::session::SessionStore;

/// The current tab's `window.sessionStorage`.
///
/// When storage is unavailable (no window, storage disabled) every read
/// misses and writes are dropped with a warning.
#[derive(Clone, Debug)]
pub struct BrowserSessionStorage {
    storage: Option<Storage>,
}

impl BrowserSessionStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("sessionStorage unavailable; wallet session will not survive reloads");
        }
        Self { storage }
    }
}

impl Default for BrowserSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to write sessionStorage key {}: {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove sessionStorage key {}: {:?}", key, e);
            }
        }
    }
}
