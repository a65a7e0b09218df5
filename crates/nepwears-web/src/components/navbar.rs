//! Navigation bar: desktop header with the collections dropdown, slide-in mobile menu
//!
//! All interactive state lives in `NavigationController`; this component only
//! mirrors its snapshots into a signal and owns the body scroll lock.

use leptos::prelude::*;
use leptos_router::components::A;
use nepwears_core::menu::{
    collection_href, NavLink, ACCOUNT, CART, DESKTOP_LINKS, MOBILE_FOOTER_LINKS, MOBILE_LINKS,
    SEARCH, SHOP_ALL,
};
use nepwears_core::{
    CollectionItem, DropdownId, MenuTrigger, NavConfig, NavSnapshot, NavigationController,
    ScrollLockSlot,
};

use crate::api::ApiCollections;
use crate::dom::{BodyScroll, WindowScroll};

/// Copyable handle the view closures use to reach the controller
#[derive(Clone, Copy)]
struct NavHandle {
    controller: StoredValue<NavigationController, LocalStorage>,
    lock: StoredValue<Option<ScrollLockSlot<BodyScroll>>, LocalStorage>,
    snapshot: ReadSignal<NavSnapshot>,
}

impl NavHandle {
    /// Flip the mobile menu and apply the resulting lock request
    fn toggle_menu(&self, trigger: MenuTrigger) {
        let Some(request) = self
            .controller
            .try_with_value(|c| c.toggle_mobile_menu_via(trigger))
        else {
            return;
        };

        self.lock.update_value(|slot| {
            if slot.is_none() {
                *slot = BodyScroll::from_document().map(ScrollLockSlot::new);
            }
            match slot {
                Some(slot) => {
                    slot.apply(request);
                }
                None => leptos::logging::warn!("No document body, scroll lock skipped"),
            }
        });
    }

    fn toggle_dropdown(&self, id: DropdownId) {
        self.controller.with_value(|c| c.toggle_dropdown(id));
    }

    fn open_dropdown(&self, id: DropdownId) {
        self.controller.with_value(|c| c.open_dropdown(id));
    }

    fn close_dropdown(&self) {
        self.controller.with_value(|c| c.close_dropdown());
    }

    fn menu_open(&self) -> bool {
        self.snapshot.with(|s| s.state.mobile_menu_open)
    }

    fn dropdown_open(&self, id: DropdownId) -> bool {
        self.snapshot.with(|s| s.state.is_dropdown_open(id))
    }

    fn scrolled(&self) -> bool {
        self.snapshot.with(|s| s.state.scrolled)
    }

    fn collections(&self) -> Vec<CollectionItem> {
        self.snapshot.with(|s| s.visible_collections().to_vec())
    }

    fn collections_error(&self) -> Option<String> {
        self.snapshot
            .with(|s| s.collections_status.failure().map(str::to_string))
    }

    fn teardown(&self) {
        self.controller.try_update_value(|c| {
            if let Err(e) = c.teardown() {
                leptos::logging::warn!("Navigation teardown: {}", e);
            }
        });
        self.lock.try_update_value(|slot| {
            if let Some(slot) = slot {
                slot.release();
            }
        });
    }
}

/// Site-wide navigation bar
#[component]
pub fn Navbar(
    /// Brand shown as the logo alt text
    #[prop(into, default = "NepWears".to_string())]
    brand: String,
    #[prop(optional)] config: Option<NavConfig>,
) -> impl IntoView {
    let controller = NavigationController::new(config.unwrap_or_default());
    let (snapshot, set_snapshot) = signal(controller.snapshot());
    controller.subscribe(move |next| set_snapshot.set(next.clone()));

    let nav = NavHandle {
        controller: StoredValue::new_local(controller),
        lock: StoredValue::new_local(None),
        snapshot,
    };

    // Browser only: register the scroll listener and start the fetch once
    Effect::new(move |_| {
        let Some(window_scroll) = WindowScroll::new() else {
            leptos::logging::warn!("No window, navigation runs without scroll tracking");
            return;
        };
        let load = nav
            .controller
            .try_update_value(|c| c.initialize(&window_scroll, ApiCollections::default()));
        match load {
            Some(Ok(load)) => leptos::task::spawn_local(load),
            Some(Err(e)) => leptos::logging::error!("Navigation init failed: {}", e),
            None => {}
        }
    });

    on_cleanup(move || nav.teardown());

    view! {
        <header class="navbar" class:navbar-scrolled=move || nav.scrolled()>
            <div class="navbar-inner">
                <div class="navbar-hamburger">
                    <button
                        class="icon-button"
                        on:click=move |_| nav.toggle_menu(MenuTrigger::MenuButton)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || nav.menu_open().to_string()
                    >
                        {move || {
                            if nav.menu_open() {
                                view! { <CloseIcon /> }.into_any()
                            } else {
                                view! { <MenuIcon /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                <div class="navbar-logo">
                    <A href="/" attr:class="navbar-logo-link">
                        <img src="/logo.png" alt=brand width="160" height="60" />
                    </A>
                </div>

                <nav class="navbar-desktop">
                    <div
                        class="nav-dropdown"
                        on:mouseenter=move |_| nav.open_dropdown(DropdownId::Shop)
                        on:mouseleave=move |_| nav.close_dropdown()
                    >
                        <button class="nav-link nav-dropdown-trigger">
                            <span>"Shop By Collection"</span>
                            <ChevronIcon class="nav-chevron" />
                        </button>
                        <div
                            class="dropdown-panel"
                            class:dropdown-open=move || nav.dropdown_open(DropdownId::Shop)
                        >
                            <A href=SHOP_ALL.href attr:class="dropdown-link">
                                {SHOP_ALL.label}
                            </A>
                            {move || {
                                nav.collections()
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <A href=collection_href(&item.slug) attr:class="dropdown-link">
                                                {item.name}
                                            </A>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                    {DESKTOP_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <A href=link.href attr:class="nav-link">
                                    <span>{link.label}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="navbar-icons">
                    <A href=ACCOUNT.href attr:class="icon-button navbar-account" attr:aria-label=ACCOUNT.label>
                        <UserIcon />
                    </A>
                    <A href=SEARCH.href attr:class="icon-button" attr:aria-label=SEARCH.label>
                        <SearchIcon />
                    </A>
                    <A href=CART.href attr:class="icon-button" attr:aria-label=CART.label>
                        <CartIcon />
                    </A>
                </div>
            </div>
        </header>

        // Backdrop behind the mobile menu
        <Show when=move || nav.menu_open()>
            <div class="mobile-overlay" on:click=move |_| nav.toggle_menu(MenuTrigger::Overlay)></div>
        </Show>

        <aside class="mobile-menu" class:mobile-menu-open=move || nav.menu_open()>
            <div class="mobile-menu-top">
                <button
                    class="icon-button"
                    on:click=move |_| nav.toggle_menu(MenuTrigger::CloseButton)
                    aria-label="Close menu"
                >
                    <CloseIcon />
                </button>
            </div>

            <nav class="mobile-menu-nav">
                <div>
                    <button
                        class="mobile-link mobile-shop-toggle"
                        on:click=move |_| nav.toggle_dropdown(DropdownId::MobileShop)
                        aria-expanded=move || nav.dropdown_open(DropdownId::MobileShop).to_string()
                    >
                        <span>"Shop"</span>
                        <ChevronIcon class="mobile-chevron" />
                    </button>
                    <Show when=move || nav.dropdown_open(DropdownId::MobileShop)>
                        <div class="mobile-submenu">
                            <MobileLink nav link=SHOP_ALL class="mobile-sublink" />
                            {move || {
                                nav.collections()
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <A
                                                href=collection_href(&item.slug)
                                                attr:class="mobile-sublink"
                                                on:click=move |_| nav.toggle_menu(MenuTrigger::NavigationLink)
                                            >
                                                {item.name}
                                            </A>
                                        }
                                    })
                                    .collect_view()
                            }}
                            {move || {
                                nav.collections_error()
                                    .map(|message| {
                                        view! { <p class="mobile-submenu-error">{message}</p> }
                                    })
                            }}
                        </div>
                    </Show>
                </div>

                {MOBILE_LINKS
                    .iter()
                    .map(|link| view! { <MobileLink nav link=*link class="mobile-link" /> })
                    .collect_view()}
            </nav>

            <div class="mobile-menu-footer">
                {MOBILE_FOOTER_LINKS
                    .iter()
                    .map(|link| view! { <MobileLink nav link=*link class="mobile-footer-link" /> })
                    .collect_view()}
            </div>
        </aside>
    }
}

/// Mobile menu link; following it closes the menu
#[component]
fn MobileLink(nav: NavHandle, link: NavLink, class: &'static str) -> impl IntoView {
    view! {
        <A
            href=link.href
            attr:class=class
            on:click=move |_| nav.toggle_menu(MenuTrigger::NavigationLink)
        >
            {link.label}
        </A>
    }
}

#[component]
fn ChevronIcon(class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24" width="16" height="16">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"/>
        </svg>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <line x1="3" y1="6" x2="21" y2="6"/>
            <line x1="3" y1="12" x2="21" y2="12"/>
            <line x1="3" y1="18" x2="21" y2="18"/>
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        </svg>
    }
}

#[component]
fn UserIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        </svg>
    }
}

#[component]
fn SearchIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.3-4.3"/>
        </svg>
    }
}

#[component]
fn CartIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="8" cy="21" r="1"/>
            <circle cx="19" cy="21" r="1"/>
            <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>
        </svg>
    }
}
