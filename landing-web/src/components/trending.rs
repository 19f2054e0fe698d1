//! Trending card for the demo page

use leptos::prelude::*;

/// Served by trunk from `assets/images/`.
pub const SOLANA_LOGO: &str = "/assets/images/solana.svg";

#[component]
pub fn TrendingWidget() -> impl IntoView {
    view! {
        <div class="trending-widget">
            <h2 class="trending-heading">"Trending"</h2>
            <div class="trending-item">
                <div class="trending-text">
                    <h3>"Solana Radar Hackathon Malaysia Side Track"</h3>
                    <p>"by Superteam Malaysia"</p>
                </div>
                <img src=SOLANA_LOGO alt="News Image" class="trending-image"/>
            </div>
        </div>
    }
}
