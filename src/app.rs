//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::require_auth::RequireAuth;
use crate::pages::{
    appointments::AppointmentsPage, auth_callback::AuthCallbackPage, chats::ChatsPage,
    dashboard::DashboardPage, emergency::EmergencyPage, landing::LandingPage, login::LoginPage,
    payment_return::PaymentReturnPage, register::RegisterPage, vet_detail::VetDetailPage,
    vet_directory::VetDirectoryPage, vet_profile_setup::VetProfileSetupPage,
};
use crate::state::{auth::SessionIdentity, session::SessionStore, ui::UiState};
use crate::util::auth::fragment_has_login_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and shared state contexts, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session store is created exactly once per app instance and
    // handed to consumers via context; it re-reads durable storage here
    // so an existing session survives a reload.
    let session = SessionStore::load();
    let identity = RwSignal::new(SessionIdentity::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(identity);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/vetlink.css"/>
        <Title text="VetLink"/>

        <Router>
            <AppRoutes/>
        </Router>
    }
}

/// Route table, gated by the federated-login return check.
///
/// The fragment check keys routing itself: while the location fragment
/// carries a login session id, the callback page renders instead of the
/// route table, so no route guard can redirect away before the one-time
/// id is consumed.
#[component]
fn AppRoutes() -> impl IntoView {
    let location = use_location();
    let login_return = move || fragment_has_login_session(&location.hash.get());

    view! {
        <Show when=move || !login_return() fallback=|| view! { <AuthCallbackPage/> }>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("vets")
                    view=|| view! { <RequireAuth><VetDirectoryPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("vets"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><VetDetailPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("appointments")
                    view=|| view! { <RequireAuth><AppointmentsPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("emergency")
                    view=|| view! { <RequireAuth><EmergencyPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("chats")
                    view=|| view! { <RequireAuth><ChatsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("vet"), StaticSegment("setup"))
                    view=|| view! { <RequireAuth><VetProfileSetupPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("payment"), StaticSegment("success"))
                    view=|| view! { <RequireAuth><PaymentReturnPage/></RequireAuth> }
                />
            </Routes>
        </Show>
    }
}
