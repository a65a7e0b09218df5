//! Home page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::StorefrontContext;
use crate::components::Hero;

/// Landing page: hero banner and the shop entry point
#[component]
pub fn Home() -> impl IntoView {
    let storefront = use_context::<StorefrontContext>();
    let tagline = move || {
        storefront
            .map(|s| s.tagline())
            .unwrap_or_else(|| "Your fashion destination".to_string())
    };

    view! {
        <div class="page home-page">
            <Hero />
            <section class="home-intro">
                <h2 class="home-intro-title">{tagline}</h2>
                <p class="home-intro-text">
                    "Shirts, polos and linens made for everyday wear."
                </p>
                <A href="/product" attr:class="btn btn-primary">"Shop All"</A>
            </section>
        </div>
    }
}
