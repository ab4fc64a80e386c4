//! Emergency alert form.

#[cfg(test)]
#[path = "emergency_test.rs"]
mod emergency_test;

use leptos::prelude::*;

use crate::net::types::EmergencyCreate;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

fn validate_emergency_input(
    location: &str,
    pet_name: &str,
    pet_type: &str,
    description: &str,
) -> Result<EmergencyCreate, &'static str> {
    let location = location.trim();
    let pet_name = pet_name.trim();
    let pet_type = pet_type.trim();
    let description = description.trim();
    if location.is_empty() || pet_name.is_empty() || pet_type.is_empty() || description.is_empty() {
        return Err("Every field is required to send an alert.");
    }
    Ok(EmergencyCreate {
        location: location.to_owned(),
        description: description.to_owned(),
        pet_name: pet_name.to_owned(),
        pet_type: pet_type.to_owned(),
    })
}

#[component]
pub fn EmergencyPage() -> impl IntoView {
    let location = RwSignal::new(String::new());
    let pet_name = RwSignal::new(String::new());
    let pet_type = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
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
        let body = match validate_emergency_input(
            &location.get(),
            &pet_name.get(),
            &pet_type.get(),
            &description.get(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_emergency_request(&session, &body).await {
                    Ok(_) => {
                        ui.update(|s| {
                            s.notice = Some(crate::state::ui::Notice::success(
                                "Emergency alert sent to nearby vets!",
                            ));
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Failed to send alert: {e}"));
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
        <div class="emergency-page">
            <a class="back-link" href="/dashboard">"Back to Dashboard"</a>
            <div class="emergency-page__intro">
                <h1>"Emergency Help"</h1>
                <p>"Send an emergency alert to available vets in your area"</p>
            </div>
            <form class="emergency-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Your location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <div class="emergency-form__row">
                    <input
                        type="text"
                        placeholder="Pet name"
                        prop:value=move || pet_name.get()
                        on:input=move |ev| pet_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Pet type"
                        prop:value=move || pet_type.get()
                        on:input=move |ev| pet_type.set(event_target_value(&ev))
                    />
                </div>
                <textarea
                    placeholder="Describe the emergency situation..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || !info.get().is_empty()>
                    <p class="emergency-form__message">{move || info.get()}</p>
                </Show>
                <button class="emergency-form__send" type="submit" disabled=move || busy.get()>
                    "Send Emergency Alert"
                </button>
            </form>
        </div>
    }
}
