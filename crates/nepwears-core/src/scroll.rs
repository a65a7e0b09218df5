//! Page scroll plumbing: the body scroll lock and scroll listener registrations
//!
//! Both are scoped resources. A `ScrollLockGuard` restores page scrolling when
//! dropped, and a `ScrollListener` deregisters its handler when detached or
//! dropped. The render surface owns the lock; the navigation controller only
//! says whether it wants it held.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Page whose scrolling can be suspended while an overlay is open
pub trait ScrollLockTarget: Clone {
    fn suspend_scroll(&self);
    fn restore_scroll(&self);
}

/// Desired lock state signalled by the navigation controller
#[must_use = "apply the request to the scroll lock, or the page stays locked"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollLockRequest {
    Lock,
    Unlock,
}

impl ScrollLockRequest {
    pub fn from_wanted(wanted: bool) -> Self {
        if wanted {
            Self::Lock
        } else {
            Self::Unlock
        }
    }
}

/// What `ScrollLockSlot::apply` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockTransition {
    Acquired,
    Released,
    Unchanged,
}

/// Held scroll lock; scrolling is restored on drop
#[must_use = "dropping the guard restores page scrolling immediately"]
pub struct ScrollLockGuard<T: ScrollLockTarget> {
    target: T,
}

impl<T: ScrollLockTarget> ScrollLockGuard<T> {
    pub fn acquire(target: &T) -> Self {
        target.suspend_scroll();
        Self {
            target: target.clone(),
        }
    }
}

impl<T: ScrollLockTarget> Drop for ScrollLockGuard<T> {
    fn drop(&mut self) {
        self.target.restore_scroll();
    }
}

/// Owner of at most one outstanding scroll lock
pub struct ScrollLockSlot<T: ScrollLockTarget> {
    target: T,
    held: Option<ScrollLockGuard<T>>,
}

impl<T: ScrollLockTarget> ScrollLockSlot<T> {
    pub fn new(target: T) -> Self {
        Self { target, held: None }
    }

    /// Bring the held lock in line with the request
    pub fn apply(&mut self, request: ScrollLockRequest) -> LockTransition {
        match (request, self.held.is_some()) {
            (ScrollLockRequest::Lock, false) => {
                self.held = Some(ScrollLockGuard::acquire(&self.target));
                debug!("Scroll lock acquired");
                LockTransition::Acquired
            }
            (ScrollLockRequest::Unlock, true) => {
                self.held = None;
                debug!("Scroll lock released");
                LockTransition::Released
            }
            _ => LockTransition::Unchanged,
        }
    }

    pub fn release(&mut self) -> LockTransition {
        self.apply(ScrollLockRequest::Unlock)
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }
}

/// Host environment emitting vertical scroll offsets
pub trait ScrollSource {
    /// Register `handler` for every scroll change until the returned
    /// registration is detached or dropped
    fn listen(&self, handler: Box<dyn FnMut(f64)>) -> ScrollListener;
}

/// Registration of a scroll handler
#[must_use = "dropping the listener deregisters it"]
pub struct ScrollListener {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollListener {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister now
    pub fn detach(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for ScrollListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollListener")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

type Handler = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct ManualInner {
    offset: f64,
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    /// Handlers taken out by an in-progress `emit`
    in_flight: usize,
    /// Registrations released while their handler was in flight
    detached: Vec<u64>,
}

/// In-process scroll source driven by `emit`
///
/// Stands in for the browser window outside WASM.
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `offset` and notify every registered handler
    ///
    /// No borrow is held while handlers run, so they may read the source,
    /// register more handlers or drop their own registration.
    pub fn emit(&self, offset: f64) {
        let mut handlers = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            trace!(offset, handlers = inner.handlers.len(), "Scroll emitted");
            let handlers = std::mem::take(&mut inner.handlers);
            inner.in_flight = handlers.len();
            handlers
        };

        for (_, handler) in handlers.iter_mut() {
            handler(offset);
        }

        let detached = std::mem::take(&mut self.inner.borrow_mut().detached);
        handlers.retain(|(id, _)| !detached.contains(id));

        let mut inner = self.inner.borrow_mut();
        // Registered during this emit: keep them after the existing ones
        handlers.append(&mut inner.handlers);
        inner.handlers = handlers;
        inner.in_flight = 0;
    }

    pub fn current_offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    pub fn listener_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.handlers.len() + inner.in_flight - inner.detached.len()
    }
}

impl ScrollSource for ManualScrollSource {
    fn listen(&self, handler: Box<dyn FnMut(f64)>) -> ScrollListener {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, handler));
            id
        };

        let weak: Weak<RefCell<ManualInner>> = Rc::downgrade(&self.inner);
        ScrollListener::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let removed = {
                let mut inner = inner.borrow_mut();
                match inner.handlers.iter().position(|(other, _)| *other == id) {
                    Some(index) => Some(inner.handlers.remove(index)),
                    None => {
                        if inner.in_flight > 0 {
                            inner.detached.push(id);
                        }
                        None
                    }
                }
            };
            // Dropped after the borrow ends; the handler may own registrations
            drop(removed);
        })
    }
}
