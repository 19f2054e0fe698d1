//! AIGuardian Landing - Leptos Frontend
//!
//! Marketing page with a Phantom connect button and a gated demo route.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::{DemoPage, LandingPage};
use crate::state::wallet::provide_wallet_context;
use crate::utils::constants::HOME_ROUTE;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/demo") view=DemoPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href=HOME_ROUTE>
                    <span class="btn btn-accent">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
