//! Integration tests for the navigation controller

use nepwears_core::{
    CollectionItem, CollectionsProvider, CollectionsStatus, CoreError, DropdownId,
    FetchFailurePolicy, LifecycleStage, ManualScrollSource, MenuTrigger, NavConfig, NavState,
    NavigationController, ScrollLockRequest, ScrollLockSlot, ScrollLockTarget, StaticCollections,
};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Page that records whether scrolling is suspended
#[derive(Clone, Default)]
struct RecordingPage {
    locked: Rc<Cell<bool>>,
    acquisitions: Rc<Cell<usize>>,
}

impl ScrollLockTarget for RecordingPage {
    fn suspend_scroll(&self) {
        assert!(!self.locked.get(), "scroll lock acquired twice");
        self.locked.set(true);
        self.acquisitions.set(self.acquisitions.get() + 1);
    }

    fn restore_scroll(&self) {
        self.locked.set(false);
    }
}

struct FailingCollections;

impl CollectionsProvider for FailingCollections {
    async fn fetch_collections(&self) -> Result<Vec<CollectionItem>, CoreError> {
        Err(CoreError::fetch("HTTP error: 503"))
    }
}

fn six_collections() -> Vec<CollectionItem> {
    (1..=6)
        .map(|i| CollectionItem::new(format!("Collection {}", i), format!("collection-{}", i)))
        .collect()
}

#[test]
fn test_dropdown_toggle_parity() {
    for calls in 0..8 {
        let controller = NavigationController::new(NavConfig::default());
        for _ in 0..calls {
            controller.toggle_dropdown(DropdownId::Shop);
        }
        let expected = if calls % 2 == 1 {
            Some(DropdownId::Shop)
        } else {
            None
        };
        assert_eq!(controller.state().active_dropdown, expected, "calls = {}", calls);
    }
}

#[test]
fn test_last_dropdown_wins() {
    let controller = NavigationController::new(NavConfig::default());
    controller.toggle_dropdown(DropdownId::Shop);
    controller.toggle_dropdown(DropdownId::MobileShop);
    assert_eq!(
        controller.state().active_dropdown,
        Some(DropdownId::MobileShop)
    );
}

#[test]
fn test_menu_toggle_parity_across_triggers() {
    let triggers = [
        MenuTrigger::MenuButton,
        MenuTrigger::CloseButton,
        MenuTrigger::Overlay,
        MenuTrigger::NavigationLink,
    ];

    for calls in 0..12usize {
        let page = RecordingPage::default();
        let mut slot = ScrollLockSlot::new(page.clone());
        let controller = NavigationController::new(NavConfig::default());

        for i in 0..calls {
            // Rotate through triggers with a stride so neighbours differ
            let trigger = triggers[(i * 3 + calls) % triggers.len()];
            slot.apply(controller.toggle_mobile_menu_via(trigger));
        }

        let open = calls % 2 == 1;
        assert_eq!(controller.state().mobile_menu_open, open, "calls = {}", calls);
        assert_eq!(controller.wants_scroll_lock(), open);
        assert_eq!(slot.is_held(), open);
        assert_eq!(page.locked.get(), open);
    }
}

#[test]
fn test_scroll_offset_rules() {
    let controller = NavigationController::new(NavConfig::default());

    controller.on_scroll(0.0);
    assert!(!controller.state().scrolled);

    controller.on_scroll(1.0);
    assert!(controller.state().scrolled);

    controller.on_scroll(0.5);
    assert!(controller.state().scrolled);

    controller.on_scroll(0.0);
    assert!(!controller.state().scrolled);

    controller.on_scroll(9_000.0);
    controller.on_scroll(9_000.0);
    assert!(controller.state().scrolled);
}

#[test]
fn test_mobile_menu_scenario() {
    let page = RecordingPage::default();
    let mut slot = ScrollLockSlot::new(page.clone());
    let controller = NavigationController::new(NavConfig::default());
    assert_eq!(controller.state(), NavState::default());

    slot.apply(controller.toggle_mobile_menu());
    assert_eq!(
        controller.state(),
        NavState {
            mobile_menu_open: true,
            active_dropdown: None,
            scrolled: false,
        }
    );
    assert!(page.locked.get());

    controller.toggle_dropdown(DropdownId::MobileShop);
    assert_eq!(
        controller.state(),
        NavState {
            mobile_menu_open: true,
            active_dropdown: Some(DropdownId::MobileShop),
            scrolled: false,
        }
    );

    let request = controller.toggle_mobile_menu();
    assert_eq!(request, ScrollLockRequest::Unlock);
    slot.apply(request);
    assert_eq!(
        controller.state(),
        NavState {
            mobile_menu_open: false,
            active_dropdown: Some(DropdownId::MobileShop),
            scrolled: false,
        }
    );
    assert!(!page.locked.get());
    assert_eq!(page.acquisitions.get(), 1);
}

#[tokio::test]
async fn test_initialize_caps_visible_collections() {
    let source = ManualScrollSource::new();
    let mut controller = NavigationController::new(NavConfig::default());

    let load = controller
        .initialize(&source, StaticCollections::new(six_collections()))
        .unwrap();
    assert!(controller.snapshot().collections_status.is_pending());
    load.await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.collections_status, CollectionsStatus::Ready);
    assert_eq!(snapshot.collections.len(), 6);

    let visible: Vec<&str> = snapshot
        .visible_collections()
        .iter()
        .map(|item| item.slug.as_str())
        .collect();
    assert_eq!(
        visible,
        vec!["collection-1", "collection-2", "collection-3", "collection-4"]
    );

    controller.teardown().unwrap();
}

#[tokio::test]
async fn test_configured_limit_never_exceeds_menu_cap() {
    let source = ManualScrollSource::new();
    let config = NavConfig {
        collection_menu_limit: 10,
        ..NavConfig::default()
    };
    let mut controller = NavigationController::new(config);
    controller
        .initialize(&source, StaticCollections::new(six_collections()))
        .unwrap()
        .await;

    assert_eq!(controller.snapshot().visible_collections().len(), 4);
    controller.teardown().unwrap();
}

#[tokio::test]
async fn test_toggles_work_while_fetch_pending() {
    let source = ManualScrollSource::new();
    let mut controller = NavigationController::new(NavConfig::default());
    let load = controller
        .initialize(&source, StaticCollections::default())
        .unwrap();

    assert_eq!(controller.toggle_mobile_menu(), ScrollLockRequest::Lock);
    controller.toggle_dropdown(DropdownId::MobileShop);
    source.emit(120.0);

    let snapshot = controller.snapshot();
    assert!(snapshot.collections.is_empty());
    assert!(snapshot.state.mobile_menu_open);
    assert!(snapshot.state.scrolled);

    load.await;
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.collections.len(), 4);
    assert_eq!(snapshot.state.active_dropdown, Some(DropdownId::MobileShop));

    controller.teardown().unwrap();
}

#[tokio::test]
async fn test_scroll_events_reach_controller_until_teardown() {
    let source = ManualScrollSource::new();
    let mut controller = NavigationController::new(NavConfig::default());
    controller
        .initialize(&source, StaticCollections::default())
        .unwrap()
        .await;

    source.emit(40.0);
    assert!(controller.state().scrolled);
    assert_eq!(source.listener_count(), 1);

    controller.teardown().unwrap();
    assert_eq!(source.listener_count(), 0);
    assert_eq!(controller.stage(), LifecycleStage::TornDown);

    source.emit(0.0);
    assert!(controller.state().scrolled);

    let err = controller.teardown().unwrap_err();
    assert!(matches!(
        err,
        CoreError::Lifecycle {
            stage: LifecycleStage::TornDown,
            ..
        }
    ));
}

#[test]
fn test_teardown_without_initialize_allowed_once() {
    let mut controller = NavigationController::new(NavConfig::default());
    controller.teardown().unwrap();
    assert_eq!(controller.stage(), LifecycleStage::TornDown);

    assert!(matches!(
        controller.teardown(),
        Err(CoreError::Lifecycle {
            stage: LifecycleStage::TornDown,
            ..
        })
    ));

    let source = ManualScrollSource::new();
    assert!(controller
        .initialize(&source, StaticCollections::default())
        .is_err());
    assert_eq!(source.listener_count(), 0);
}

#[tokio::test]
async fn test_fetch_failure_degrades_by_default() {
    let source = ManualScrollSource::new();
    let mut controller = NavigationController::new(NavConfig::default());
    controller
        .initialize(&source, FailingCollections)
        .unwrap()
        .await;

    let snapshot = controller.snapshot();
    assert!(snapshot.collections.is_empty());
    assert_eq!(snapshot.collections_status, CollectionsStatus::Ready);
    controller.teardown().unwrap();
}

#[tokio::test]
async fn test_fetch_failure_surfaced_when_configured() {
    let source = ManualScrollSource::new();
    let config = NavConfig {
        fetch_failure: FetchFailurePolicy::Surface,
        ..NavConfig::default()
    };
    let mut controller = NavigationController::new(config);
    controller
        .initialize(&source, FailingCollections)
        .unwrap()
        .await;

    let status = controller.snapshot().collections_status;
    assert_eq!(
        status.failure(),
        Some("Failed to fetch collections: HTTP error: 503")
    );
    controller.teardown().unwrap();
}

#[tokio::test]
async fn test_late_fetch_after_teardown_is_discarded() {
    let source = ManualScrollSource::new();
    let mut controller = NavigationController::new(NavConfig::default());
    let load = controller
        .initialize(&source, StaticCollections::default())
        .unwrap();

    controller.teardown().unwrap();
    load.await;

    let snapshot = controller.snapshot();
    assert!(snapshot.collections.is_empty());
    assert!(snapshot.collections_status.is_pending());
}

#[tokio::test]
async fn test_observers_see_population() {
    let source = ManualScrollSource::new();
    let mut controller = NavigationController::new(NavConfig::default());
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);
    controller.subscribe(move |snapshot| {
        sink.store(snapshot.visible_collections().len(), Ordering::SeqCst);
    });

    controller
        .initialize(&source, StaticCollections::default())
        .unwrap()
        .await;

    assert_eq!(seen.load(Ordering::SeqCst), 4);
    controller.teardown().unwrap();
}
