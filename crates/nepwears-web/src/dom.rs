//! Browser bindings for the navigation core: body scroll lock and window scroll events

use leptos::web_sys::{self, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use nepwears_core::{ScrollListener, ScrollLockTarget, ScrollSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `document.body`, locked through its `overflow` style
#[derive(Clone)]
pub struct BodyScroll {
    body: HtmlElement,
}

impl BodyScroll {
    pub fn from_document() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self { body })
    }

    fn set_overflow(&self, value: &str) {
        if let Err(e) = self.body.style().set_property("overflow", value) {
            leptos::logging::warn!("Failed to set body overflow to {}: {:?}", value, e);
        }
    }
}

impl ScrollLockTarget for BodyScroll {
    fn suspend_scroll(&self) {
        self.set_overflow("hidden");
    }

    fn restore_scroll(&self) {
        self.set_overflow("unset");
    }
}

/// Scroll events of the browser window
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
        })
    }
}

impl ScrollSource for WindowScroll {
    fn listen(&self, mut handler: Box<dyn FnMut(f64)>) -> ScrollListener {
        let reader = self.window.clone();
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            handler(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut(_)>);

        if let Err(e) = self
            .window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            leptos::logging::error!("Failed to add scroll listener: {:?}", e);
        }

        // The closure must outlive the registration, so the release owns it
        let window = self.window.clone();
        ScrollListener::new(move || {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                leptos::logging::warn!("Failed to remove scroll listener: {:?}", e);
            }
        })
    }
}

/// Smooth-scroll the window down by one viewport height
pub fn scroll_one_viewport() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(height);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
