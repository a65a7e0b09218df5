//! Placeholder for storefront pages not built yet

use leptos::prelude::*;
use leptos_router::components::A;

/// Placeholder page with a way back home
#[component]
pub fn ComingSoon(
    /// Page title (e.g., "Best Sellers", "Cart")
    #[prop(into)]
    title: String,
    /// What the page will show
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="coming-soon">
            <div class="coming-soon-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // Shopping bag icon (lucide-shopping-bag)
                    <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"/>
                    <path d="M3 6h18"/>
                    <path d="M16 10a4 4 0 0 1-8 0"/>
                </svg>
            </div>
            <h2 class="coming-soon-title">{title}</h2>
            <p class="coming-soon-description">
                {description.unwrap_or("This page is on its way. Check back soon.")}
            </p>

            <div class="coming-soon-actions">
                <A href="/" attr:class="btn btn-primary">
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
