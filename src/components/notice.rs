//! Dismissible app-wide notice banner.
//!
//! Flows (auth bootstrap, registration, logout) push a notice into
//! `UiState`; whichever page renders next shows it here. Clicking the
//! banner dismisses it.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || {
        match ui.get().notice.map(|n| n.kind) {
            Some(NoticeKind::Error) => "notice-banner notice-banner--error",
            _ => "notice-banner notice-banner--success",
        }
    };

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <button
                class=class
                type="button"
                on:click=move |_| ui.update(|s| s.notice = None)
            >
                {move || ui.get().notice.map(|n| n.text).unwrap_or_default()}
            </button>
        </Show>
    }
}
