//! Messages placeholder page.

use leptos::prelude::*;

#[component]
pub fn ChatsPage() -> impl IntoView {
    view! {
        <div class="chats-page">
            <a class="back-link" href="/dashboard">"Back to Dashboard"</a>
            <h1>"Messages"</h1>
            <div class="chats-page__placeholder">
                <p>"Chat feature coming soon!"</p>
            </div>
        </div>
    }
}
