//! Role-routed dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The route guard has already
//! resolved the identity by the time this renders; the page only decides
//! which dashboard fits the user's role and loads that role's data.

use leptos::prelude::*;

use crate::components::appointment_card::AppointmentCard;
use crate::components::loading::LoadingScreen;
use crate::components::notice::NoticeBanner;
use crate::net::types::{Appointment, EmergencyRequest, User, UserType};
use crate::state::auth::SessionIdentity;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Picks the owner or vet dashboard from the resolved identity.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let identity = expect_context::<RwSignal<SessionIdentity>>();

    move || match identity.get() {
        SessionIdentity::Authenticated(user) => match user.user_type {
            UserType::Vet => view! { <VetDashboard user=user/> }.into_any(),
            UserType::PetOwner => view! { <OwnerDashboard user=user/> }.into_any(),
        },
        _ => view! { <LoadingScreen/> }.into_any(),
    }
}

/// Shared dashboard chrome: brand, greeting, logout.
#[component]
fn DashboardHeader(
    #[prop(into)] title: String,
    #[prop(into)] greeting: String,
) -> impl IntoView {
    let identity = expect_context::<RwSignal<SessionIdentity>>();
    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
    let session = expect_context::<crate::state::session::SessionStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&session).await;
                session.clear();
                ui.update(|s| {
                    s.notice = Some(crate::state::ui::Notice::success("Logged out successfully"));
                });
                identity.set(SessionIdentity::Unauthenticated);
                navigate(
                    "/login",
                    NavigateOptions { replace: true, ..Default::default() },
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate, &identity, &ui);
        }
    };

    view! {
        <header class="dashboard-header">
            <h1 class="dashboard-header__brand">{title}</h1>
            <div class="dashboard-header__actions">
                <span class="dashboard-header__greeting">{greeting}</span>
                <button class="dashboard-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}

/// Pet-owner dashboard: quick actions plus booking overview.
#[component]
fn OwnerDashboard(user: User) -> impl IntoView {
    let vet_count = RwSignal::new(0usize);
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::state::session::SessionStore>();
        leptos::task::spawn_local(async move {
            let (vets_res, apts_res) = futures::join!(
                crate::net::api::fetch_vets(&session),
                crate::net::api::fetch_appointments(&session),
            );
            if let Ok(vets) = vets_res {
                vet_count.set(vets.len());
            }
            if let Ok(apts) = apts_res {
                appointments.set(apts);
            }
            loading.set(false);
        });
    }

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="VetLink" greeting=format!("Hi, {}", user.name)/>
            <NoticeBanner/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen/> }>
                <main class="dashboard-page__content">
                    <h2>"Welcome Back!"</h2>
                    <p class="dashboard-page__tagline">"How can we help your pet today?"</p>
                    <div class="quick-actions">
                        <a class="quick-action" href="/vets">
                            <h3>"Find a Vet"</h3>
                            <p>{move || format!("{} vets available", vet_count.get())}</p>
                        </a>
                        <a class="quick-action quick-action--emergency" href="/emergency">
                            <h3>"Emergency"</h3>
                            <p>"Alert nearby vets now"</p>
                        </a>
                        <a class="quick-action" href="/appointments">
                            <h3>"Appointments"</h3>
                            <p>{move || format!("{} booked", appointments.get().len())}</p>
                        </a>
                        <a class="quick-action" href="/chats">
                            <h3>"Messages"</h3>
                            <p>"Chat with your vet"</p>
                        </a>
                    </div>
                </main>
            </Show>
        </div>
    }
}

/// Vet dashboard: schedule plus live emergency requests.
#[component]
fn VetDashboard(user: User) -> impl IntoView {
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let emergencies = RwSignal::new(Vec::<EmergencyRequest>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionStore>();

    #[cfg(feature = "hydrate")]
    let reload = {
        let session = session.clone();
        move || {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let (apts_res, emergencies_res) = futures::join!(
                    crate::net::api::fetch_appointments(&session),
                    crate::net::api::fetch_emergency_requests(&session),
                );
                if let Ok(apts) = apts_res {
                    appointments.set(apts);
                }
                if let Ok(reqs) = emergencies_res {
                    emergencies.set(reqs);
                }
                loading.set(false);
            });
        }
    };

    #[cfg(feature = "hydrate")]
    reload();

    let on_accept = Callback::new(move |request_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::accept_emergency_request(&session, &request_id).await {
                    Ok(_) => reload(),
                    Err(e) => log::warn!("failed to accept emergency request: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request_id;
        }
    });

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="VetLink - Vet Dashboard" greeting=format!("Dr. {}", user.name)/>
            <NoticeBanner/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen/> }>
                <main class="dashboard-page__content">
                    <h2>{format!("Welcome, Dr. {}", user.name)}</h2>
                    <p class="dashboard-page__tagline">
                        "Manage your appointments and emergency requests"
                    </p>
                    <div class="stats-row">
                        <div class="stat-card">
                            <p class="stat-card__value">{move || appointments.get().len()}</p>
                            <p class="stat-card__label">"Appointments"</p>
                        </div>
                        <div class="stat-card">
                            <p class="stat-card__value">{move || emergencies.get().len()}</p>
                            <p class="stat-card__label">"Emergency Requests"</p>
                        </div>
                    </div>
                    <Show when=move || !emergencies.get().is_empty()>
                        <section class="emergency-list">
                            <h3>"Emergency Requests"</h3>
                            <For
                                each=move || emergencies.get()
                                key=|req| req.request_id.clone()
                                children=move |req: EmergencyRequest| {
                                    let active = req.status == "active";
                                    let request_id = req.request_id.clone();
                                    view! {
                                        <div class="emergency-card">
                                            <div class="emergency-card__details">
                                                <h4>{format!("Emergency - {}", req.pet_name)}</h4>
                                                <p>{req.description.clone()}</p>
                                                <p>{format!("Location: {}", req.location)}</p>
                                                <p>
                                                    {format!(
                                                        "Owner: {}",
                                                        req.owner_name.clone().unwrap_or_default(),
                                                    )}
                                                </p>
                                            </div>
                                            <Show when=move || active>
                                                <button
                                                    class="emergency-card__accept"
                                                    on:click={
                                                        let request_id = request_id.clone();
                                                        move |_| on_accept.run(request_id.clone())
                                                    }
                                                >
                                                    "Accept"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                }
                            />
                        </section>
                    </Show>
                    <section class="appointment-list">
                        <h3>"Your Appointments"</h3>
                        <Show
                            when=move || !appointments.get().is_empty()
                            fallback=|| view! { <p>"No appointments scheduled yet"</p> }
                        >
                            <For
                                each=move || appointments.get()
                                key=|apt| apt.appointment_id.clone()
                                children=|apt: Appointment| view! { <AppointmentCard appointment=apt/> }
                            />
                        </Show>
                    </section>
                </main>
            </Show>
        </div>
    }
}
