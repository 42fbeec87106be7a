//! Per-region fullscreen handle.
//!
//! A handle tracks whether its attached node is the host's fullscreen element. The flag is
//! derived: it changes only when the host's change notification fires (or when
//! [`FullscreenHandle::on_external_change`] is called), never optimistically from
//! `enter`/`exit`. A caller awaiting `enter()` may still read `false` until the
//! notification arrives.

use crate::host::{ChangeListener, FullscreenHost, HostFuture};
use futures::future::{self, FutureExt};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type ActiveObserver = Rc<dyn Fn(bool)>;

struct HandleState<H: FullscreenHost + ?Sized> {
    host: Rc<H>,
    node: RefCell<Option<H::Node>>,
    active: Cell<bool>,
    listener: RefCell<Option<ChangeListener>>,
    observer: RefCell<Option<ActiveObserver>>,
}

/// Shared handle for one fullscreenable region.
///
/// Clones refer to the same handle. The handle does not own its node; the region that
/// attached it does.
pub struct FullscreenHandle<H: FullscreenHost + ?Sized> {
    state: Rc<HandleState<H>>,
}

impl<H: FullscreenHost + ?Sized> Clone for FullscreenHandle<H> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<H: FullscreenHost + ?Sized> fmt::Debug for FullscreenHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullscreenHandle")
            .field("active", &self.state.active.get())
            .field("attached", &self.state.node.borrow().is_some())
            .field("open", &self.state.listener.borrow().is_some())
            .finish_non_exhaustive()
    }
}

impl<H: FullscreenHost + ?Sized + 'static> FullscreenHandle<H> {
    /// Creates an inactive, unattached, unsubscribed handle.
    pub fn new(host: Rc<H>) -> Self {
        Self {
            state: Rc::new(HandleState {
                host,
                node: RefCell::new(None),
                active: Cell::new(false),
                listener: RefCell::new(None),
                observer: RefCell::new(None),
            }),
        }
    }

    /// True iff the host's fullscreen element is this handle's node, as of the last
    /// change notification.
    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }

    pub fn node(&self) -> Option<H::Node> {
        self.state.node.borrow().clone()
    }

    /// Whether the change listener is currently subscribed.
    pub fn is_open(&self) -> bool {
        self.state.listener.borrow().is_some()
    }

    /// True when both values refer to the same handle.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Registers the callback that mirrors `active` into a reactive store.
    /// Called once per genuine change of the flag.
    pub fn set_active_observer(&self, observer: impl Fn(bool) + 'static) {
        *self.state.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Attaches the region's rendered node. Actions target this node.
    pub fn attach(&self, node: H::Node) {
        log::trace!("fullscreen handle: node attached");
        *self.state.node.borrow_mut() = Some(node);
    }

    /// Clears the attached node. Returns the node that was attached, if any.
    pub fn detach(&self) -> Option<H::Node> {
        log::trace!("fullscreen handle: node detached");
        self.state.node.borrow_mut().take()
    }

    /// Subscribes to the host's change notification. Calling it again while subscribed
    /// does nothing.
    pub fn open(&self) {
        if self.is_open() {
            return;
        }

        let weak: Weak<HandleState<H>> = Rc::downgrade(&self.state);
        let listener: ChangeListener = Rc::new(move || {
            if let Some(state) = weak.upgrade() {
                FullscreenHandle { state }.on_external_change();
            }
        });

        self.state.host.add_change_listener(&listener);
        *self.state.listener.borrow_mut() = Some(listener);
        log::debug!("fullscreen handle: subscribed to change notification");
    }

    /// Unsubscribes the listener registered by [`Self::open`], using the same reference.
    pub fn close(&self) {
        let listener = self.state.listener.borrow_mut().take();
        if let Some(listener) = listener {
            self.state.host.remove_change_listener(&listener);
            log::debug!("fullscreen handle: unsubscribed from change notification");
        }
    }

    /// Recomputes `active` from the host's current fullscreen element and publishes it
    /// when it changed. Ignored while the handle is closed.
    pub fn on_external_change(&self) {
        if !self.is_open() {
            return;
        }

        let active = self.is_current();
        if self.state.active.replace(active) == active {
            return;
        }

        log::debug!("fullscreen handle: active -> {active}");
        let observer = self.state.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(active);
        }
    }

    /// Requests that this handle's node become the fullscreen element.
    ///
    /// If another node (or this one) is already fullscreen, the current state is exited
    /// first and the request is only made once that exit resolved. The first platform
    /// call happens before this returns, so it runs inside the caller's user gesture.
    /// Resolves `Ok(())` without touching the host when the capability is unsupported or
    /// no node is attached.
    pub fn enter(&self) -> HostFuture<Result<(), H::Error>> {
        let host = &self.state.host;
        if !host.is_supported() {
            log::debug!("fullscreen enter ignored: capability unsupported");
            return future::ready(Ok(())).boxed_local();
        }
        let Some(node) = self.node() else {
            log::debug!("fullscreen enter ignored: no node attached");
            return future::ready(Ok(())).boxed_local();
        };

        if host.fullscreen_element().is_none() {
            return host.request_fullscreen(&node);
        }

        let exit = host.exit_fullscreen();
        let host = Rc::clone(host);
        async move {
            exit.await?;
            host.request_fullscreen(&node).await
        }
        .boxed_local()
    }

    /// Requests exit when this handle's node is the fullscreen element; otherwise
    /// resolves `Ok(())` without a platform call.
    pub fn exit(&self) -> HostFuture<Result<(), H::Error>> {
        let host = &self.state.host;
        if !host.is_supported() || !self.is_current() {
            return future::ready(Ok(())).boxed_local();
        }
        host.exit_fullscreen()
    }

    /// `exit()` when this handle's node is fullscreen, `enter()` otherwise.
    pub fn toggle(&self) -> HostFuture<Result<(), H::Error>> {
        if self.is_current() {
            self.exit()
        } else {
            self.enter()
        }
    }

    /// Reads the host directly: is the attached node the fullscreen element right now.
    fn is_current(&self) -> bool {
        let node = self.state.node.borrow();
        match (self.state.host.fullscreen_element(), node.as_ref()) {
            (Some(element), Some(node)) => element == *node,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHost, HostCall};

    type TestHandle = FullscreenHandle<FakeHost<&'static str>>;

    fn open_handle(host: &Rc<FakeHost<&'static str>>, node: &'static str) -> TestHandle {
        let handle = FullscreenHandle::new(Rc::clone(host));
        handle.open();
        handle.attach(node);
        handle
    }

    #[test]
    fn test_new_handle_is_inactive_and_detached() {
        let host = Rc::new(FakeHost::<&'static str>::new());
        let handle = FullscreenHandle::new(Rc::clone(&host));

        assert!(!handle.is_active());
        assert!(handle.node().is_none());
        assert!(!handle.is_open());
        assert_eq!(host.subscribe_count(), 0);
    }

    #[test]
    fn test_open_is_idempotent() {
        let host = Rc::new(FakeHost::<&'static str>::new());
        let handle = FullscreenHandle::new(Rc::clone(&host));

        handle.open();
        handle.open();

        assert_eq!(host.subscribe_count(), 1);
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn test_notification_for_own_node_activates() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");

        host.set_fullscreen_element(Some("a"));
        host.dispatch_change();

        assert!(handle.is_active());
    }

    #[test]
    fn test_notification_for_other_node_stays_inactive() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");

        host.set_fullscreen_element(Some("other"));
        host.dispatch_change();

        assert!(!handle.is_active());
    }

    #[test]
    fn test_unattached_handle_is_never_active() {
        let host = Rc::new(FakeHost::<&'static str>::new());
        let handle = FullscreenHandle::new(Rc::clone(&host));
        handle.open();

        host.dispatch_change();

        assert!(!handle.is_active());
    }

    #[test]
    fn test_observer_fires_only_on_change() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        handle.set_active_observer(move |active| seen_clone.borrow_mut().push(active));

        host.set_fullscreen_element(Some("a"));
        host.dispatch_change();
        host.dispatch_change();
        host.set_fullscreen_element(None);
        host.dispatch_change();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_enter_without_node_is_noop() {
        let host = Rc::new(FakeHost::<&'static str>::new());
        let handle = FullscreenHandle::new(Rc::clone(&host));
        handle.open();

        pollster::block_on(handle.enter()).unwrap();

        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_enter_when_unsupported_is_noop() {
        let host = Rc::new(FakeHost::new());
        host.set_supported(false);
        let handle = open_handle(&host, "a");

        pollster::block_on(handle.enter()).unwrap();

        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_exit_when_unsupported_is_noop() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");
        host.set_fullscreen_element(Some("a"));
        host.set_supported(false);

        pollster::block_on(handle.exit()).unwrap();

        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_enter_request_is_made_before_await() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");

        let pending = handle.enter();
        assert_eq!(host.calls(), vec![HostCall::Request("a")]);

        pollster::block_on(pending).unwrap();
        assert_eq!(host.calls(), vec![HostCall::Request("a")]);
    }

    #[test]
    fn test_enter_does_not_set_active_optimistically() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");

        pollster::block_on(handle.enter()).unwrap();
        assert!(!handle.is_active());

        host.dispatch_change();
        assert!(handle.is_active());
    }

    #[test]
    fn test_enter_while_self_active_exits_first() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");
        host.set_fullscreen_element(Some("a"));

        pollster::block_on(handle.enter()).unwrap();

        assert_eq!(host.calls(), vec![HostCall::Exit, HostCall::Request("a")]);
    }

    #[test]
    fn test_exit_rejection_aborts_swap() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "b");
        host.set_fullscreen_element(Some("a"));
        host.reject_next_exit("exit denied");

        let err = pollster::block_on(handle.enter()).unwrap_err();

        assert_eq!(err.0, "exit denied");
        assert_eq!(host.calls(), vec![HostCall::Exit]);
    }

    #[test]
    fn test_toggle_switches_between_enter_and_exit() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");

        pollster::block_on(handle.toggle()).unwrap();
        pollster::block_on(handle.toggle()).unwrap();

        assert_eq!(host.calls(), vec![HostCall::Request("a"), HostCall::Exit]);
    }

    #[test]
    fn test_close_ignores_later_notifications() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");

        handle.close();
        handle.close();
        host.set_fullscreen_element(Some("a"));
        handle.on_external_change();

        assert!(!handle.is_active());
        assert_eq!(host.unsubscribe_count(), 1);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_dropped_handle_listener_is_inert() {
        let host = Rc::new(FakeHost::new());
        let handle = open_handle(&host, "a");
        drop(handle);

        host.set_fullscreen_element(Some("a"));
        host.dispatch_change();

        assert_eq!(host.listener_count(), 1);
    }
}
