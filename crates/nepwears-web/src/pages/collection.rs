//! Collection page, routed by slug

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::ComingSoon;

/// Title for a slug: `old-money-polos` → `Old Money Polos`
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Products of one collection
#[component]
pub fn CollectionPage() -> impl IntoView {
    let params = use_params_map();
    let title = move || {
        params.with(|p| title_from_slug(&p.get("slug").unwrap_or_default()))
    };

    view! {
        <div class="page collection-page">
            {move || {
                view! {
                    <ComingSoon
                        title=title()
                        description="Products for this collection will be listed here."
                    />
                }
            }}
        </div>
    }
}
