//! Navigation controller
//!
//! Owns the navigation bar state and merges three event sources into one
//! render input: user toggles, scroll signals from the host, and the one-shot
//! collections fetch. State lives behind `parking_lot::RwLock` in an `Arc` so
//! the fetch future and the scroll handler can update it without borrowing
//! the controller.

use crate::collections::{CollectionItem, CollectionsProvider, CollectionsStatus};
use crate::config::{FetchFailurePolicy, NavConfig};
use crate::error::{CoreError, LifecycleStage};
use crate::scroll::{ScrollListener, ScrollLockRequest, ScrollSource};
use crate::state::{DropdownId, MenuTrigger, NavSnapshot, NavState};
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Callback invoked with the new snapshot after every change
pub type NavObserver = Arc<dyn Fn(&NavSnapshot) + Send + Sync>;

/// Handle for removing an observer with `unsubscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, NavObserver)>,
}

#[derive(Debug, Default)]
struct CollectionsSlot {
    items: Vec<CollectionItem>,
    status: CollectionsStatus,
}

struct Shared {
    config: NavConfig,
    stage: RwLock<LifecycleStage>,
    state: RwLock<NavState>,
    collections: RwLock<CollectionsSlot>,
    observers: RwLock<Observers>,
}

impl Shared {
    fn snapshot(&self) -> NavSnapshot {
        let state = *self.state.read();
        let collections = self.collections.read();
        NavSnapshot {
            state,
            collections: collections.items.clone(),
            collections_status: collections.status.clone(),
            collection_menu_limit: self.config.collection_menu_limit,
        }
    }

    /// Observers run after every lock is released, so they may call back
    /// into the controller.
    fn notify(&self) {
        let observers: Vec<NavObserver> = self
            .observers
            .read()
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        if observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &observers {
            observer(&snapshot);
        }
    }

    /// Apply `f` to the state and notify observers if anything changed
    fn update_state<R>(&self, f: impl FnOnce(&mut NavState) -> R) -> R {
        let (result, changed) = {
            let mut state = self.state.write();
            let before = *state;
            let result = f(&mut state);
            (result, *state != before)
        };
        if changed {
            self.notify();
        }
        result
    }

    fn on_scroll(&self, offset: f64) {
        self.update_state(|state| state.scrolled = offset > 0.0);
    }

    fn populate(&self, result: Result<Vec<CollectionItem>, CoreError>) {
        if *self.stage.read() == LifecycleStage::TornDown {
            debug!("Collections arrived after teardown, discarding");
            return;
        }

        {
            let mut slot = self.collections.write();
            match result {
                Ok(items) => {
                    info!(count = items.len(), "Collections loaded");
                    slot.items = items;
                    slot.status = CollectionsStatus::Ready;
                }
                Err(e) => {
                    warn!(error = %e, policy = ?self.config.fetch_failure, "Collections fetch failed");
                    slot.items.clear();
                    slot.status = match self.config.fetch_failure {
                        FetchFailurePolicy::Degrade => CollectionsStatus::Ready,
                        FetchFailurePolicy::Surface => CollectionsStatus::Failed {
                            message: e.to_string(),
                        },
                    };
                }
            }
        }

        self.notify();
    }
}

fn load_collections<P>(shared: Arc<Shared>, provider: P) -> impl Future<Output = ()> + 'static
where
    P: CollectionsProvider + 'static,
{
    async move {
        let result = provider.fetch_collections().await;
        shared.populate(result);
    }
}

/// Interactive state of the navigation bar
///
/// Lifecycle: `new` → `initialize` (registers the scroll listener and hands
/// back the collections fetch) → `teardown` (releases the listener). Toggles
/// work in every stage.
pub struct NavigationController {
    shared: Arc<Shared>,
    listener: Option<ScrollListener>,
}

impl NavigationController {
    pub fn new(config: NavConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                stage: RwLock::new(LifecycleStage::Created),
                state: RwLock::new(NavState::default()),
                collections: RwLock::new(CollectionsSlot::default()),
                observers: RwLock::new(Observers::default()),
            }),
            listener: None,
        }
    }

    pub fn stage(&self) -> LifecycleStage {
        *self.shared.stage.read()
    }

    /// Register the scroll listener and return the collections fetch
    ///
    /// The returned future must be driven by the caller (spawned on the UI
    /// executor or awaited). It replaces the collections list in one step when
    /// the provider resolves; nothing else waits on it.
    pub fn initialize<S, P>(
        &mut self,
        scroll: &S,
        provider: P,
    ) -> Result<impl Future<Output = ()> + 'static, CoreError>
    where
        S: ScrollSource + ?Sized,
        P: CollectionsProvider + 'static,
    {
        {
            let mut stage = self.shared.stage.write();
            if *stage != LifecycleStage::Created {
                return Err(CoreError::Lifecycle {
                    operation: "initialize",
                    stage: *stage,
                });
            }
            *stage = LifecycleStage::Initialized;
        }

        let shared = Arc::clone(&self.shared);
        self.listener = Some(scroll.listen(Box::new(move |offset| shared.on_scroll(offset))));
        info!("Navigation controller initialized");

        Ok(load_collections(Arc::clone(&self.shared), provider))
    }

    /// Release the scroll listener; call exactly once
    pub fn teardown(&mut self) -> Result<(), CoreError> {
        {
            let mut stage = self.shared.stage.write();
            if *stage == LifecycleStage::TornDown {
                return Err(CoreError::Lifecycle {
                    operation: "tear down",
                    stage: *stage,
                });
            }
            *stage = LifecycleStage::TornDown;
        }

        if let Some(listener) = self.listener.take() {
            listener.detach();
        }
        info!("Navigation controller torn down");
        Ok(())
    }

    /// Recompute `scrolled` from the instantaneous offset
    pub fn on_scroll(&self, offset: f64) {
        self.shared.on_scroll(offset);
    }

    pub fn toggle_mobile_menu(&self) -> ScrollLockRequest {
        self.toggle_mobile_menu_via(MenuTrigger::MenuButton)
    }

    /// Flip the mobile menu; every trigger flips, including the overlay and
    /// menu links. The result is the lock state the surface must apply.
    pub fn toggle_mobile_menu_via(&self, trigger: MenuTrigger) -> ScrollLockRequest {
        let reset_dropdown = self.shared.config.reset_dropdown_on_menu_close;
        let request = self.shared.update_state(|state| {
            state.mobile_menu_open = !state.mobile_menu_open;
            if !state.mobile_menu_open && reset_dropdown {
                state.active_dropdown = None;
            }
            ScrollLockRequest::from_wanted(state.mobile_menu_open)
        });
        debug!(?trigger, ?request, "Mobile menu toggled");
        request
    }

    pub fn toggle_dropdown(&self, id: DropdownId) {
        self.shared.update_state(|state| state.toggle_dropdown(id));
        debug!(dropdown = %id, "Dropdown toggled");
    }

    /// Open `id` regardless of the current panel (desktop hover)
    pub fn open_dropdown(&self, id: DropdownId) {
        self.shared
            .update_state(|state| state.active_dropdown = Some(id));
    }

    pub fn close_dropdown(&self) {
        self.shared.update_state(|state| state.active_dropdown = None);
    }

    pub fn state(&self) -> NavState {
        *self.shared.state.read()
    }

    pub fn snapshot(&self) -> NavSnapshot {
        self.shared.snapshot()
    }

    pub fn wants_scroll_lock(&self) -> bool {
        self.shared.state.read().mobile_menu_open
    }

    /// Call `observer` with a fresh snapshot after every change
    ///
    /// The observer stays registered until `unsubscribe` or until the
    /// controller is dropped.
    pub fn subscribe(
        &self,
        observer: impl Fn(&NavSnapshot) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut observers = self.shared.observers.write();
        let id = SubscriptionId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer; false if it was already removed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.shared.observers.write();
        let before = observers.entries.len();
        observers.entries.retain(|(other, _)| *other != id);
        observers.entries.len() != before
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            warn!("Navigation controller dropped without teardown, releasing scroll listener");
            listener.detach();
        }
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("stage", &self.stage())
            .field("state", &self.state())
            .field("listener", &self.listener)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::StaticCollections;
    use crate::scroll::ManualScrollSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_new_controller_defaults() {
        let controller = NavigationController::new(NavConfig::default());
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.state, NavState::default());
        assert!(snapshot.collections.is_empty());
        assert!(snapshot.collections_status.is_pending());
        assert_eq!(controller.stage(), LifecycleStage::Created);
    }

    #[test]
    fn test_observer_only_fires_on_change() {
        let controller = NavigationController::new(NavConfig::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        controller.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        controller.on_scroll(10.0);
        controller.on_scroll(25.0);
        controller.on_scroll(25.0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        controller.close_dropdown();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        controller.open_dropdown(DropdownId::Shop);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribed_observer_stops_firing() {
        let controller = NavigationController::new(NavConfig::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = controller.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        controller.on_scroll(10.0);
        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));

        controller.on_scroll(0.0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_hover_open_then_leave() {
        let controller = NavigationController::new(NavConfig::default());
        controller.open_dropdown(DropdownId::Shop);
        controller.open_dropdown(DropdownId::Shop);
        assert_eq!(controller.state().active_dropdown, Some(DropdownId::Shop));

        controller.close_dropdown();
        assert_eq!(controller.state().active_dropdown, None);
    }

    #[test]
    fn test_reset_dropdown_on_menu_close() {
        let config = NavConfig {
            reset_dropdown_on_menu_close: true,
            ..NavConfig::default()
        };
        let controller = NavigationController::new(config);

        assert_eq!(controller.toggle_mobile_menu(), ScrollLockRequest::Lock);
        controller.toggle_dropdown(DropdownId::MobileShop);
        let request = controller.toggle_mobile_menu_via(MenuTrigger::Overlay);

        assert_eq!(request, ScrollLockRequest::Unlock);
        assert_eq!(controller.state().active_dropdown, None);
    }

    #[tokio::test]
    async fn test_initialize_twice_fails() {
        let source = ManualScrollSource::new();
        let mut controller = NavigationController::new(NavConfig::default());

        let load = controller
            .initialize(&source, StaticCollections::default())
            .unwrap();
        load.await;

        let err = controller
            .initialize(&source, StaticCollections::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CoreError::Lifecycle {
                stage: LifecycleStage::Initialized,
                ..
            }
        ));
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn test_drop_without_teardown_releases_listener() {
        let source = ManualScrollSource::new();
        {
            let mut controller = NavigationController::new(NavConfig::default());
            let _load = controller
                .initialize(&source, StaticCollections::default())
                .unwrap();
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
    }
}
