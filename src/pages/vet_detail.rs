//! Vet detail page with the appointment booking form.

#[cfg(test)]
#[path = "vet_detail_test.rs"]
mod vet_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading::LoadingScreen;
use crate::net::types::{AppointmentCreate, VetProfile};

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Collect and check the booking form. Every field is required.
fn validate_booking_input(
    vet_id: &str,
    date: &str,
    time: &str,
    pet_name: &str,
    pet_type: &str,
    reason: &str,
) -> Result<AppointmentCreate, &'static str> {
    if date.is_empty()
        || time.is_empty()
        || pet_name.trim().is_empty()
        || pet_type.trim().is_empty()
        || reason.trim().is_empty()
    {
        return Err("Fill in every field to book an appointment.");
    }
    Ok(AppointmentCreate {
        vet_id: vet_id.to_owned(),
        appointment_date: date.to_owned(),
        appointment_time: time.to_owned(),
        pet_name: pet_name.trim().to_owned(),
        pet_type: pet_type.trim().to_owned(),
        reason: reason.trim().to_owned(),
    })
}

#[component]
pub fn VetDetailPage() -> impl IntoView {
    let params = use_params_map();
    let vet_id = params.read_untracked().get("id").unwrap_or_default();

    let vet = RwSignal::new(None::<VetProfile>);
    let show_form = RwSignal::new(false);
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let pet_name = RwSignal::new(String::new());
    let pet_type = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionStore>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        let vet_id = vet_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_vet(&session, &vet_id).await {
                Ok(profile) => vet.set(Some(profile)),
                Err(e) => log::warn!("failed to load vet {vet_id}: {e}"),
            }
        });
    }

    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_booking_input(
            &vet_id,
            &date.get(),
            &time.get(),
            &pet_name.get(),
            &pet_type.get(),
            &reason.get(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Booking...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_appointment(&session, &body).await {
                    Ok(_) => {
                        ui.update(|s| {
                            s.notice =
                                Some(crate::state::ui::Notice::success("Appointment booked!"));
                        });
                        navigate("/appointments", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Booking failed: {e}"));
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

    view! {
        <div class="detail-page">
            <a class="back-link" href="/vets">"Back to Directory"</a>
            <Show
                when=move || vet.get().is_some()
                fallback=|| view! { <LoadingScreen/> }
            >
                {move || {
                    vet.get()
                        .map(|profile| {
                            let name = profile.name.clone().unwrap_or_else(|| "Unknown".to_owned());
                            let bio = profile.bio.clone();
                            let has_bio = !bio.is_empty();
                            view! {
                                <div class="detail-card">
                                    <h1>{format!("Dr. {name}")}</h1>
                                    <p class="detail-card__specialty">{profile.specialty.clone()}</p>
                                    <p>{profile.location.clone()}</p>
                                    <p>{format!("{} years experience", profile.experience_years)}</p>
                                    <Show when=move || has_bio>
                                        <div class="detail-card__bio">
                                            <h3>"About"</h3>
                                            <p>{bio.clone()}</p>
                                        </div>
                                    </Show>
                                    <button
                                        class="detail-card__book"
                                        on:click=move |_| show_form.update(|open| *open = !*open)
                                    >
                                        "Book Appointment"
                                    </button>
                                </div>
                            }
                        })
                }}
            </Show>
            <Show when=move || show_form.get()>
                <form class="booking-form" on:submit=on_book.clone()>
                    <h2>"Book Appointment"</h2>
                    <div class="booking-form__row">
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                        <input
                            type="time"
                            prop:value=move || time.get()
                            on:input=move |ev| time.set(event_target_value(&ev))
                        />
                    </div>
                    <input
                        type="text"
                        placeholder="Pet Name"
                        prop:value=move || pet_name.get()
                        on:input=move |ev| pet_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Pet Type (Dog, Cat, etc.)"
                        prop:value=move || pet_type.get()
                        on:input=move |ev| pet_type.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Reason for visit"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || !info.get().is_empty()>
                        <p class="booking-form__message">{move || info.get()}</p>
                    </Show>
                    <button type="submit" disabled=move || busy.get()>
                        "Confirm Booking ($50)"
                    </button>
                </form>
            </Show>
        </div>
    }
}
