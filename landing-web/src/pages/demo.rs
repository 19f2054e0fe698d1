//! Demo Page - trending card, connected address and a read-only balance

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::TrendingWidget;
use crate::error::RpcError;
use crate::services::rpc::get_balance;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{rpc_url, HOME_ROUTE};

#[component]
pub fn DemoPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let balance = RwSignal::new(None::<Result<f64, RpcError>>);
    let loading = RwSignal::new(false);

    let fetch_balance = move |_| {
        let Some(address) = wallet_ctx.address() else {
            balance.set(Some(Err(RpcError::NotConnected)));
            return;
        };

        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = get_balance(rpc_url(), &address).await;
            if let Err(e) = &result {
                log::warn!("Balance lookup failed: {}", e);
            }
            balance.set(Some(result));
            loading.set(false);
        });
    };

    view! {
        <div class="demo">
            <div class="demo-column">
                <A href=HOME_ROUTE>
                    <span class="nav-link">"← Back"</span>
                </A>

                <TrendingWidget/>

                <div class="card">
                    <p class="card-label">"Wallet Address"</p>
                    <p class="wallet-address">
                        {move || wallet_ctx.address().unwrap_or_else(|| "Not connected".to_string())}
                    </p>

                    <button
                        class="btn btn-accent"
                        disabled=move || loading.get()
                        on:click=fetch_balance
                    >
                        {move || if loading.get() { "Fetching..." } else { "Get Balance" }}
                    </button>

                    {move || balance.get().map(|result| match result {
                        Ok(sol) => view! { <p class="balance">{format!("Balance: {} SOL", sol)}</p> }.into_any(),
                        Err(e) => view! { <p class="error-text">{e.to_string()}</p> }.into_any(),
                    })}
                </div>
            </div>
        </div>
    }
}
