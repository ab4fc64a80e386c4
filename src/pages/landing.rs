//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <h1>"Connect with Vets, Anytime"</h1>
                <p>
                    "In remote places, emergency vet care is hard to find. VetLink connects \
                     pet owners with verified veterinarians instantly."
                </p>
                <div class="landing-hero__actions">
                    <a class="landing-cta" href="/register">"Get Started"</a>
                    <a class="landing-cta landing-cta--secondary" href="/login">"Find a Vet"</a>
                </div>
            </section>
            <section class="landing-features">
                <div class="landing-feature">
                    <h3>"Verified Vets"</h3>
                    <p>"Every veterinarian is licensed and vetted before joining."</p>
                </div>
                <div class="landing-feature">
                    <h3>"Book and Pay Online"</h3>
                    <p>"Reserve a slot and pay securely without leaving home."</p>
                </div>
                <div class="landing-feature">
                    <h3>"Emergency Alerts"</h3>
                    <p>"Reach every available vet nearby with a single alert."</p>
                </div>
            </section>
        </div>
    }
}
