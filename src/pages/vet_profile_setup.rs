//! Vet profile setup, the first stop for a vet account with no profile.

#[cfg(test)]
#[path = "vet_profile_setup_test.rs"]
mod vet_profile_setup_test;

use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::types::VetProfileCreate;
use crate::state::auth::SessionIdentity;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Collect and check the profile form. `experience_years` arrives as raw
/// input text and must parse as a whole number.
fn validate_profile_input(
    license_number: &str,
    specialty: &str,
    location: &str,
    phone: &str,
    bio: &str,
    experience_years: &str,
) -> Result<VetProfileCreate, &'static str> {
    let license_number = license_number.trim();
    let specialty = specialty.trim();
    let location = location.trim();
    let phone = phone.trim();
    if license_number.is_empty() || specialty.is_empty() || location.is_empty() || phone.is_empty()
    {
        return Err("License, specialty, location, and phone are required.");
    }
    let Ok(experience_years) = experience_years.trim().parse::<u32>() else {
        return Err("Years of experience must be a whole number.");
    };
    Ok(VetProfileCreate {
        license_number: license_number.to_owned(),
        specialty: specialty.to_owned(),
        location: location.to_owned(),
        phone: phone.to_owned(),
        bio: bio.trim().to_owned(),
        experience_years,
    })
}

#[component]
pub fn VetProfileSetupPage() -> impl IntoView {
    let identity = expect_context::<RwSignal<SessionIdentity>>();
    let greeting = move || {
        identity
            .get()
            .user()
            .map(|user| format!("Almost there, Dr. {}", user.name))
            .unwrap_or_else(|| "Almost there".to_owned())
    };

    let license_number = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let experience_years = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionStore>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_profile_input(
            &license_number.get(),
            &specialty.get(),
            &location.get(),
            &phone.get(),
            &bio.get(),
            &experience_years.get(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving profile...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_vet_profile(&session, &body).await {
                    Ok(_) => {
                        ui.update(|s| {
                            s.notice = Some(crate::state::ui::Notice::success(
                                "Profile created successfully!",
                            ));
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Failed to create profile: {e}"));
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
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Set Up Your Practice"</h1>
                <p class="auth-card__subtitle">{greeting}</p>
                <NoticeBanner/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="License number"
                        prop:value=move || license_number.get()
                        on:input=move |ev| license_number.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Specialty"
                        prop:value=move || specialty.get()
                        on:input=move |ev| specialty.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Phone"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="number"
                        placeholder="Years of experience"
                        prop:value=move || experience_years.get()
                        on:input=move |ev| experience_years.set(event_target_value(&ev))
                    />
                    <textarea
                        class="auth-input"
                        placeholder="Short bio"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create Profile"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
