//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use nepwears_core::StorefrontProfile;

use crate::api::fetch_storefront;
use crate::components::{ComingSoon, Navbar};
use crate::pages::{CollectionPage, Home};

/// Storefront profile shared with pages; `None` until the API has answered
#[derive(Clone, Copy)]
pub struct StorefrontContext(RwSignal<Option<StorefrontProfile>>);

impl StorefrontContext {
    pub fn tagline(&self) -> String {
        self.0
            .with(|profile| profile.as_ref().map(|p| p.tagline.clone()))
            .unwrap_or_else(|| StorefrontProfile::default().tagline)
    }
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let profile = RwSignal::new(None::<StorefrontProfile>);
    provide_context(StorefrontContext(profile));

    let storefront = LocalResource::new(move || async move { fetch_storefront().await });
    Effect::new(move |_| {
        if let Some(result) = storefront.get() {
            let loaded = match result.as_ref() {
                Ok(loaded) => loaded.clone(),
                Err(e) => {
                    leptos::logging::warn!("Storefront profile unavailable, using defaults: {}", e);
                    StorefrontProfile::default()
                }
            };
            profile.set(Some(loaded));
        }
    });

    view! {
        <Router>
            <div class="app">
                // Built once the profile is known so the controller gets the configured nav settings
                {move || {
                    profile
                        .get()
                        .map(|p| view! { <Navbar brand=p.brand config=p.nav /> })
                }}
                <main class="content">
                    <Routes fallback=|| view! { <ComingSoon title="Page not found" /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/product") view=|| view! { <ComingSoon title="Shop All" /> } />
                        <Route path=path!("/best-sellers") view=|| view! { <ComingSoon title="Best Sellers" /> } />
                        <Route path=path!("/new-arrivals") view=|| view! { <ComingSoon title="New Arrivals" /> } />
                        <Route path=path!("/returns") view=|| view! { <ComingSoon title="Returns & Exchanges" /> } />
                        <Route path=path!("/about") view=|| view! { <ComingSoon title="About Us" /> } />
                        <Route path=path!("/contact") view=|| view! { <ComingSoon title="Contact" /> } />
                        <Route path=path!("/search") view=|| view! { <ComingSoon title="Search" /> } />
                        <Route path=path!("/cart") view=|| view! { <ComingSoon title="Shopping Cart" /> } />
                        // Account forms are served by the auth service
                        <Route
                            path=path!("/login")
                            view=|| view! {
                                <ComingSoon
                                    title="Account"
                                    description="Sign in, sign up and password recovery are handled by the account service."
                                />
                            }
                        />
                        <Route path=path!("/:slug") view=CollectionPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
