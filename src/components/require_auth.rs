//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. Identity resolution is a three-state
//! machine (`Unresolved` -> `Authenticated` | `Unauthenticated`): when the
//! shared identity was already populated by a login flow the probe is
//! skipped entirely; otherwise exactly one `/api/auth/me` probe runs per
//! mount and its result is final. Unauthenticated mounts redirect to
//! `/login` with history replacement so back-navigation cannot re-enter
//! the guarded page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingScreen;
use crate::state::auth::SessionIdentity;
#[cfg(feature = "hydrate")]
use crate::state::auth::identity_after_probe;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

/// Gate `children` behind a resolved identity.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let identity = expect_context::<RwSignal<SessionIdentity>>();

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionStore>();
        if matches!(identity.get_untracked(), SessionIdentity::Unresolved) {
            leptos::task::spawn_local(async move {
                let resolved =
                    identity_after_probe(crate::net::api::fetch_current_user(&session).await);
                identity.set(resolved);
            });
        }
    }

    let navigate = use_navigate();
    Effect::new(move || {
        if matches!(identity.get(), SessionIdentity::Unauthenticated) {
            navigate(
                "/login",
                NavigateOptions { replace: true, ..Default::default() },
            );
        }
    });

    view! {
        <Show
            when=move || matches!(identity.get(), SessionIdentity::Authenticated(_))
            fallback=move || {
                let message = if matches!(identity.get(), SessionIdentity::Unresolved) {
                    "Loading..."
                } else {
                    "Redirecting to login..."
                };
                view! { <LoadingScreen message=message/> }
            }
        >
            {children()}
        </Show>
    }
}
