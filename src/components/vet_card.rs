//! Reusable card component for vet directory entries.

use leptos::prelude::*;

use crate::net::types::VetProfile;

/// A clickable card summarizing one vet in the directory grid.
#[component]
pub fn VetCard(vet: VetProfile) -> impl IntoView {
    let href = format!("/vets/{}", vet.user_id);
    let name = vet.name.clone().unwrap_or_else(|| "Unknown".to_owned());
    let initial = name.chars().next().unwrap_or('V').to_uppercase().to_string();
    let bio = vet.bio.clone();
    let has_bio = !bio.is_empty();

    view! {
        <a class="vet-card" href=href>
            <div class="vet-card__header">
                <div class="vet-card__avatar">
                    {match vet.picture.clone() {
                        Some(url) => view! { <img src=url alt=name.clone()/> }.into_any(),
                        None => view! { <span>{initial}</span> }.into_any(),
                    }}
                </div>
                <div>
                    <h3 class="vet-card__name">{format!("Dr. {name}")}</h3>
                    <p class="vet-card__specialty">{vet.specialty.clone()}</p>
                </div>
            </div>
            <p class="vet-card__location">{vet.location.clone()}</p>
            <p class="vet-card__experience">
                {format!("{} years experience", vet.experience_years)}
            </p>
            <Show when=move || has_bio>
                <p class="vet-card__bio">{bio.clone()}</p>
            </Show>
        </a>
    }
}
