//! Neutral full-screen loading indicator.

use leptos::prelude::*;

/// Shown while identity or page data is still being resolved.
#[component]
pub fn LoadingScreen(
    #[prop(into, default = String::from("Loading..."))] message: String,
) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
