//! Federated-login callback: exchanges the one-time session id for a
//! durable session and routes the user onward.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router renders this page instead of the route table whenever the
//! location fragment carries a login session id, before any route guard
//! can run. The exchange is exactly-once per mount (`ExchangeGuard`), and
//! the one-time id travels in a request header so it never reaches server
//! logs or history.
//!
//! ERROR HANDLING
//! ==============
//! Any failure before the token is persisted surfaces one notice and
//! lands on `/login`. Once the token is stored, a failing profile probe
//! no longer discards the session; the user falls back to the dashboard.

use leptos::prelude::*;

use crate::components::loading::LoadingScreen;
use crate::state::auth::ExchangeGuard;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::{User, UserType};
#[cfg(feature = "hydrate")]
use crate::state::auth::{Destination, SessionIdentity, resolve_destination};
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::state::ui::{Notice, UiState};
#[cfg(feature = "hydrate")]
use crate::util::auth::session_id_from_fragment;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let exchange = StoredValue::new(ExchangeGuard::default());

    #[cfg(feature = "hydrate")]
    {
        let identity = expect_context::<RwSignal<SessionIdentity>>();
        let session = expect_context::<SessionStore>();
        let ui = expect_context::<RwSignal<UiState>>();
        let navigate = use_navigate();

        if exchange.try_update_value(ExchangeGuard::try_fire).unwrap_or(false) {
            leptos::task::spawn_local(async move {
                let fragment = web_sys::window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();
                match complete_login(&session, &fragment).await {
                    Ok((user, destination)) => {
                        ui.update(|s| s.notice = Some(Notice::success("Welcome to VetLink!")));
                        identity.set(SessionIdentity::Authenticated(user));
                        navigate(
                            destination.path(),
                            NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(err) => {
                        log::error!("login exchange failed: {err}");
                        ui.update(|s| s.notice = Some(Notice::error("Authentication failed")));
                        navigate(
                            "/login",
                            NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                }
            });
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = exchange;

    view! { <LoadingScreen message="Completing sign-in..."/> }
}

/// Run the exchange flow: fragment -> durable session -> destination.
///
/// Steps are strictly sequential. The token is persisted as soon as the
/// exchange succeeds; only the pre-persist steps can fail this flow.
#[cfg(feature = "hydrate")]
async fn complete_login(
    session: &SessionStore,
    fragment: &str,
) -> Result<(User, Destination), String> {
    let session_id = session_id_from_fragment(fragment)
        .ok_or_else(|| "no session id in redirect fragment".to_owned())?;
    let auth = api::exchange_login_session(&session_id)
        .await
        .map_err(|e| e.to_string())?;
    session.set(&auth.session_token);

    let destination = match auth.user.user_type {
        UserType::Vet => match api::fetch_my_vet_profile(session).await {
            Ok(profile) => resolve_destination(UserType::Vet, profile.is_some()),
            // The session is already valid; a failed probe must not undo it.
            Err(err) => {
                log::warn!("vet profile probe failed, falling back to dashboard: {err}");
                Destination::Dashboard
            }
        },
        UserType::PetOwner => Destination::Dashboard,
    };
    Ok((auth.user, destination))
}
