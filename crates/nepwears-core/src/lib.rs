//! nepwears-core - Core library for the NepWears storefront
//!
//! Navigation bar state, scroll lock and scroll listener lifecycles,
//! the collections provider contract, menu links and configuration.
//! No async runtime: the same code runs in the WASM frontend and on the server.

pub mod collections;
pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod scroll;
pub mod state;

pub use collections::{CollectionItem, CollectionsProvider, CollectionsStatus, StaticCollections};
pub use config::{FetchFailurePolicy, NavConfig, StorefrontConfig, StorefrontProfile};
pub use controller::{NavObserver, NavigationController, SubscriptionId};
pub use error::{CoreError, LifecycleStage};
pub use scroll::{
    LockTransition, ManualScrollSource, ScrollListener, ScrollLockGuard, ScrollLockRequest,
    ScrollLockSlot, ScrollLockTarget, ScrollSource,
};
pub use state::{DropdownId, MenuTrigger, NavSnapshot, NavState};
