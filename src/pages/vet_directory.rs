//! Vet directory with client-side search filters.

#[cfg(test)]
#[path = "vet_directory_test.rs"]
mod vet_directory_test;

use leptos::prelude::*;

use crate::components::loading::LoadingScreen;
use crate::components::vet_card::VetCard;
use crate::net::types::VetProfile;

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Narrow `vets` by free-text query (name or specialty) and the two
/// dedicated filters. Empty filters match everything.
fn filter_vets(vets: &[VetProfile], query: &str, specialty: &str, location: &str) -> Vec<VetProfile> {
    vets.iter()
        .filter(|vet| {
            if !query.is_empty() {
                let name_hit = vet
                    .name
                    .as_deref()
                    .is_some_and(|name| contains_ignore_case(name, query));
                if !name_hit && !contains_ignore_case(&vet.specialty, query) {
                    return false;
                }
            }
            if !specialty.is_empty() && !contains_ignore_case(&vet.specialty, specialty) {
                return false;
            }
            if !location.is_empty() && !contains_ignore_case(&vet.location, location) {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

#[component]
pub fn VetDirectoryPage() -> impl IntoView {
    let vets = RwSignal::new(Vec::<VetProfile>::new());
    let query = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::state::session::SessionStore>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_vets(&session).await {
                Ok(list) => vets.set(list),
                Err(e) => log::warn!("failed to load vet directory: {e}"),
            }
            loading.set(false);
        });
    }

    let filtered = move || filter_vets(&vets.get(), &query.get(), &specialty.get(), &location.get());

    view! {
        <div class="directory-page">
            <a class="back-link" href="/dashboard">"Back to Dashboard"</a>
            <h1>"Find a Vet"</h1>
            <p class="directory-page__tagline">"Search for veterinarians in your area"</p>
            <div class="directory-filters">
                <input
                    class="directory-filter"
                    type="text"
                    placeholder="Search by name or specialty"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <input
                    class="directory-filter"
                    type="text"
                    placeholder="Filter by specialty"
                    prop:value=move || specialty.get()
                    on:input=move |ev| specialty.set(event_target_value(&ev))
                />
                <input
                    class="directory-filter"
                    type="text"
                    placeholder="Filter by location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen/> }>
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| {
                        view! {
                            <p class="directory-empty">
                                "No vets found. Try adjusting your filters."
                            </p>
                        }
                    }
                >
                    <div class="directory-grid">
                        <For
                            each=filtered
                            key=|vet| vet.user_id.clone()
                            children=|vet: VetProfile| view! { <VetCard vet=vet/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
