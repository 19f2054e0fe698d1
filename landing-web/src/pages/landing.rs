//! Landing Page - marketing sections with the Phantom connect button
//!
//! The header's "Demo" link is gated on whether a connect has ever succeeded
//! in this tab. Before that it opens an instructional dialog instead of
//! routing.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use web_sys::MouseEvent;

use crate::components::{ActionSteps, AiEngineSection, Dialog, MonitoringSection, TechStacks};
use crate::session::DemoClick;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{DEMO_ROUTE, GITHUB_URL, HACKATHON_URL};

#[component]
pub fn LandingPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let navigate = use_navigate();
    let dialog_open = RwSignal::new(false);

    let on_demo_click = move |ev: MouseEvent| {
        ev.prevent_default();
        match wallet_ctx.demo_click() {
            DemoClick::Navigate => navigate(DEMO_ROUTE, Default::default()),
            DemoClick::ShowDialog => dialog_open.set(true),
        }
    };

    view! {
        <div class="landing">
            <header class="landing-header">
                <nav class="landing-nav">
                    <h1 class="brand">"AIGuardian"</h1>
                    <div class="nav-links">
                        <a href="#how" class="nav-link">"How it Works"</a>
                        <a href=DEMO_ROUTE class="nav-link" on:click=on_demo_click>"Demo"</a>
                    </div>
                    <div class="wallet-actions">
                        <button class="btn btn-accent connect-button" on:click=move |_| wallet_ctx.connect()>
                            {move || wallet_ctx.button_label()}
                        </button>
                        <Show when=move || wallet_ctx.is_connected()>
                            <button class="btn btn-ghost" on:click=move |_| wallet_ctx.disconnect()>
                                "Disconnect"
                            </button>
                        </Show>
                    </div>
                </nav>
            </header>

            <main class="landing-main">
                <section class="hero">
                    <h2 class="hero-title">"un-deepfake you."</h2>
                    <h2 class="hero-title">
                        <span class="gradient-text">"AI GUARDIAN"</span>
                        <br/>
                        <span>"IS HERE."</span>
                    </h2>
                    <a href=GITHUB_URL class="btn btn-accent hero-link">"View on Github"</a>
                </section>

                <section class="section section-narrow">
                    <TechStacks/>
                </section>
                <section class="section">
                    <AiEngineSection/>
                </section>
                <section class="section section-wide">
                    <MonitoringSection/>
                </section>
                <section class="section" id="how">
                    <ActionSteps/>
                </section>
            </main>

            <footer class="landing-footer">
                <p>
                    "AIGuardian for "
                    <a href=HACKATHON_URL target="_blank" class="footer-link">
                        "Solana Radar Hackathon Malaysia Side Track"
                    </a>
                </p>
                <p>"© 2024 AIGuardian"</p>
            </footer>

            <Dialog
                open=dialog_open
                title="Phantom Wallet Not Connected"
                description="Please connect Phantom Wallet to access the demo."
            />

            {move || wallet_ctx.error_message().map(|err| view! {
                <div class="error-text">{err}</div>
            })}
        </div>
    }
}
