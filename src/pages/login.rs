//! Login page: email + password sign-in and federated sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::api::ApiError;
use crate::net::types::LoginRequest;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// External identity provider; returns control via a redirect carrying a
/// one-time session id in the URL fragment.
pub const FEDERATED_AUTH_URL: &str = "https://auth.emergentagent.com/";

#[cfg(any(test, feature = "hydrate"))]
fn federated_login_url(redirect_encoded: &str) -> String {
    format!("{FEDERATED_AUTH_URL}?redirect={redirect_encoded}")
}

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(401) => "Invalid email or password.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionStore>();
    #[cfg(feature = "hydrate")]
    let identity = expect_context::<RwSignal<crate::state::auth::SessionIdentity>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_login_input(&email.get(), &password.get()) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&body).await {
                    Ok(auth) => {
                        session.set(&auth.session_token);
                        identity.set(crate::state::auth::SessionIdentity::Authenticated(auth.user));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(login_error_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
        }
    };

    let on_federated = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let origin = window.location().origin().unwrap_or_default();
                let redirect =
                    js_sys::encode_uri_component(&format!("{origin}/dashboard")).as_string();
                if let Some(redirect) = redirect {
                    let _ = window.location().set_href(&federated_login_url(&redirect));
                }
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to VetLink"</p>
                <NoticeBanner/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-divider"></div>
                <button class="auth-button auth-button--secondary" on:click=on_federated>
                    "Continue with Google"
                </button>
                <p class="auth-switch">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
