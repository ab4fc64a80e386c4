//! Registration page with account-type selection.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::api::ApiError;
use crate::net::types::{RegisterRequest, UserType};

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

const MIN_PASSWORD_LEN: usize = 6;

fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    user_type: UserType,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        user_type,
    })
}

fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(400) => "Email already registered.".to_owned(),
        other => format!("Registration failed: {other}"),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(UserType::PetOwner);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionStore>();
    #[cfg(feature = "hydrate")]
    let identity = expect_context::<RwSignal<crate::state::auth::SessionIdentity>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_register_input(
            &name.get(),
            &email.get(),
            &password.get(),
            user_type.get(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&body).await {
                    Ok(auth) => {
                        session.set(&auth.session_token);
                        ui.update(|s| {
                            s.notice = Some(crate::state::ui::Notice::success(
                                "Account created successfully!",
                            ));
                        });
                        // A fresh vet has no profile yet, so the shared
                        // routing decision sends them to profile setup.
                        let destination = crate::state::auth::resolve_destination(
                            auth.user.user_type,
                            false,
                        );
                        identity.set(crate::state::auth::SessionIdentity::Authenticated(auth.user));
                        navigate(destination.path(), NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(register_error_message(&e));
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

    let type_button_class = move |this: UserType| {
        if user_type.get() == this {
            "type-toggle type-toggle--active"
        } else {
            "type-toggle"
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join VetLink"</h1>
                <p class="auth-card__subtitle">"Create your account to get started"</p>
                <NoticeBanner/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"I am a"</label>
                    <div class="type-toggle-row">
                        <button
                            type="button"
                            class=move || type_button_class(UserType::PetOwner)
                            on:click=move |_| user_type.set(UserType::PetOwner)
                        >
                            "Pet Owner"
                        </button>
                        <button
                            type="button"
                            class=move || type_button_class(UserType::Vet)
                            on:click=move |_| user_type.set(UserType::Vet)
                        >
                            "Veterinarian"
                        </button>
                    </div>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
