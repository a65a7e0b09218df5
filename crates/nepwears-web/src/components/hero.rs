//! Hero banner

use leptos::prelude::*;
use leptos_router::components::A;

use crate::dom::scroll_one_viewport;

/// Full-width banner linking to the catalogue, with a scroll-down button
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <A href="/product" attr:class="hero-link">
                <div class="hero-media">
                    <img
                        src="/hero.png"
                        alt="NepWears new season collection"
                        width="1920"
                        height="700"
                        class="hero-image hero-image-desktop"
                    />
                    <img
                        src="/SummerSale.png"
                        alt="NepWears summer sale"
                        width="768"
                        height="500"
                        class="hero-image hero-image-mobile"
                    />
                    <button
                        class="hero-scroll"
                        aria-label="Scroll down"
                        on:click=move |ev| {
                            // The button sits inside the banner link
                            ev.prevent_default();
                            ev.stop_propagation();
                            scroll_one_viewport();
                        }
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke-width="1.5"
                            stroke="currentColor"
                            class="hero-scroll-icon"
                        >
                            <path stroke-linecap="round" stroke-linejoin="round" d="M19 9l-7 7-7-7"/>
                        </svg>
                    </button>
                </div>
            </A>
        </section>
    }
}
