//! Demo link gate

use super::store::SessionStore;
use crate::utils::constants::HAS_CONNECTED_KEY;

/// What a click on the "Demo" link should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoClick {
    /// Route straight to the demo page.
    Navigate,
    /// Stay put and open the "connect Phantom first" dialog.
    ShowDialog,
}

/// Whether any connect has succeeded in this tab. Survives `disconnect`.
pub fn has_connected(store: &impl SessionStore) -> bool {
    store
        .get(HAS_CONNECTED_KEY)
        .is_some_and(|flag| !flag.is_empty())
}

/// Decide the outcome of a "Demo" click. This is a UI hint only; the stored
/// address is not re-checked.
pub fn demo_click(store: &impl SessionStore) -> DemoClick {
    if has_connected(store) {
        DemoClick::Navigate
    } else {
        DemoClick::ShowDialog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryStore;

    #[test]
    fn test_fresh_session_shows_dialog() {
        let store = MemoryStore::default();
        assert!(!has_connected(&store));
        assert_eq!(demo_click(&store), DemoClick::ShowDialog);
    }

    #[test]
    fn test_flag_set_navigates() {
        let store = MemoryStore::default();
        store.set(HAS_CONNECTED_KEY, "true");
        assert_eq!(demo_click(&store), DemoClick::Navigate);
    }

    #[test]
    fn test_empty_flag_counts_as_unset() {
        let store = MemoryStore::default();
        store.set(HAS_CONNECTED_KEY, "");
        assert_eq!(demo_click(&store), DemoClick::ShowDialog);
    }
}
