//! Phantom Wallet Integration via wasm-bindgen
//!
//! Thin bindings over the `window.solana` object injected by the Phantom
//! extension, plus [`PhantomAdapter`], the [`WalletAdapter`] the page uses.

use gloo_utils::errors::JsError;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::error::WalletError;
use crate::session::WalletAdapter;

/// Provider error code for a dismissed permission prompt (EIP-1193 style).
pub const USER_REJECTED_CODE: i64 = 4001;

/// Message Phantom uses for the same condition on older builds.
pub const USER_REJECTED_MESSAGE: &str = "User rejected the request.";

// ============================================================================
// PHANTOM BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function isPhantomInstalled() {
    return !!(window.solana && window.solana.isPhantom === true);
}

export function getPhantomAddress() {
    if (window.solana && window.solana.publicKey) {
        return window.solana.publicKey.toString();
    }
    return null;
}

export async function connectPhantom() {
    const response = await window.solana.connect();
    return response.publicKey.toString();
}

export function onPhantomEvent(event, callback) {
    if (window.solana && typeof window.solana.on === 'function') {
        window.solana.on(event, callback);
        return true;
    }
    return false;
}
")]
extern "C" {
    /// `true` when `window.solana` exists and reports `isPhantom`.
    #[wasm_bindgen(js_name = isPhantomInstalled)]
    pub fn is_phantom_installed() -> bool;

    /// Base58 public key of the currently connected account, if any.
    #[wasm_bindgen(js_name = getPhantomAddress)]
    pub fn get_phantom_address() -> Option<String>;

    /// Open the Phantom permission prompt. Resolves to the base58 public key.
    #[wasm_bindgen(js_name = connectPhantom, catch)]
    async fn connect_phantom() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = onPhantomEvent)]
    fn on_phantom_event(event: &str, callback: &Closure<dyn FnMut()>) -> bool;
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

/// Map a provider failure to the user-facing category.
pub fn classify_provider_error(code: Option<i64>, message: Option<&str>) -> WalletError {
    if code == Some(USER_REJECTED_CODE) || message == Some(USER_REJECTED_MESSAGE) {
        return WalletError::UserRejected;
    }

    let detail = match (code, message) {
        (Some(code), Some(message)) => format!("{} (code {})", message, code),
        (None, Some(message)) => message.to_string(),
        (Some(code), None) => format!("code {}", code),
        (None, None) => "unknown provider error".to_string(),
    };
    WalletError::ConnectionFailed(detail)
}

/// Pull `code` and `message` off whatever the provider threw.
fn wallet_error_from_js(err: JsValue) -> WalletError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i64);

    let message = match err.as_string() {
        Some(text) => Some(text),
        None => JsError::try_from(err.clone())
            .map(|js_err| js_err.message)
            .ok()
            .or_else(|| {
                Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|v| v.as_string())
            }),
    };

    classify_provider_error(code, message.as_deref())
}

// ============================================================================
// ADAPTER
// ============================================================================

/// The injected Phantom provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhantomAdapter;

impl WalletAdapter for PhantomAdapter {
    fn is_available(&self) -> bool {
        is_phantom_installed()
    }

    async fn connect(&self) -> Result<String, WalletError> {
        let value = connect_phantom().await.map_err(|err| {
            let err = wallet_error_from_js(err);
            log::warn!("Phantom connect failed: {:?}", err);
            err
        })?;

        value.as_string().ok_or_else(|| {
            WalletError::ConnectionFailed("public key is not a string".to_string())
        })
    }
}

/// Observe Phantom's own `connect` / `disconnect` events.
///
/// Returns `false` when no provider is injected. The handlers live for the
/// rest of the page, so the closures are leaked on purpose.
pub fn subscribe_provider_events<C, D>(on_connect: C, on_disconnect: D) -> bool
where
    C: FnMut() + 'static,
    D: FnMut() + 'static,
{
    if !is_phantom_installed() {
        return false;
    }

    let on_connect = Closure::<dyn FnMut()>::new(on_connect);
    let on_disconnect = Closure::<dyn FnMut()>::new(on_disconnect);

    let subscribed =
        on_phantom_event("connect", &on_connect) && on_phantom_event("disconnect", &on_disconnect);

    on_connect.forget();
    on_disconnect.forget();
    subscribed
}
