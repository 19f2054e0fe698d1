//! Modal dialog

use leptos::ev;
use leptos::prelude::*;

/// Centered modal shown while `open` is true. Closes on the button, a click
/// on the backdrop, or Escape.
#[component]
pub fn Dialog(
    open: RwSignal<bool>,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div
                    class="dialog-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="dialog-title">{title}</h2>
                    <p class="dialog-description">{description}</p>
                    <button class="btn btn-accent dialog-close" on:click=move |_| open.set(false)>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
