//! Appointment list with the pay-now handoff to external checkout.

use leptos::prelude::*;

use crate::components::appointment_card::AppointmentCard;
use crate::components::loading::LoadingScreen;
use crate::components::notice::NoticeBanner;
use crate::net::types::Appointment;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let loading = RwSignal::new(true);
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionStore>();

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_appointments(&session).await {
                Ok(list) => appointments.set(list),
                Err(e) => log::warn!("failed to load appointments: {e}"),
            }
            loading.set(false);
        });
    }

    // Hand the browser to the external checkout page; the payment-return
    // route picks up confirmation when the provider redirects back.
    let on_pay = Callback::new(move |appointment_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let origin = window.location().origin().unwrap_or_default();
                let Some(origin) = js_sys::encode_uri_component(&origin).as_string() else {
                    return;
                };
                match crate::net::api::create_checkout_session(&session, &appointment_id, &origin)
                    .await
                {
                    Ok(checkout) => {
                        let _ = window.location().set_href(&checkout.url);
                    }
                    Err(e) => {
                        log::warn!("checkout failed for {appointment_id}: {e}");
                        info.set("Payment initiation failed".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = appointment_id;
        }
    });

    view! {
        <div class="appointments-page">
            <a class="back-link" href="/dashboard">"Back to Dashboard"</a>
            <h1>"My Appointments"</h1>
            <NoticeBanner/>
            <Show when=move || !info.get().is_empty()>
                <p class="appointments-page__message">{move || info.get()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen/> }>
                <Show
                    when=move || !appointments.get().is_empty()
                    fallback=|| view! { <p class="appointments-empty">"No appointments yet"</p> }
                >
                    <div class="appointments-list">
                        <For
                            each=move || appointments.get()
                            key=|apt| apt.appointment_id.clone()
                            children=move |apt: Appointment| {
                                view! { <AppointmentCard appointment=apt on_pay=on_pay/> }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
