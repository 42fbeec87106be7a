//! Deterministic in-memory host for tests.
//!
//! `FakeHost` records every platform call in order, applies successful transitions to its
//! own fullscreen element, and fires the change notification only when a test calls
//! [`FakeHost::dispatch_change`]. That gap models the real platform, where the
//! notification arrives after the request future settles.

use crate::host::{same_listener, ChangeListener, FullscreenHost, HostFuture};
use futures::future::{self, FutureExt};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// One platform call observed by a [`FakeHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall<N> {
    Request(N),
    Exit,
}

/// Scripted platform rejection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fullscreen rejected: {0}")]
pub struct Rejection(pub String);

impl From<&str> for Rejection {
    fn from(reason: &str) -> Self {
        Self(reason.to_string())
    }
}

pub struct FakeHost<N, E = Rejection> {
    supported: Cell<bool>,
    element: RefCell<Option<N>>,
    calls: RefCell<Vec<HostCall<N>>>,
    listeners: RefCell<Vec<ChangeListener>>,
    subscribes: Cell<usize>,
    unsubscribes: Cell<usize>,
    request_failures: RefCell<VecDeque<E>>,
    exit_failures: RefCell<VecDeque<E>>,
}

impl<N, E> Default for FakeHost<N, E> {
    fn default() -> Self {
        Self {
            supported: Cell::new(true),
            element: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            subscribes: Cell::new(0),
            unsubscribes: Cell::new(0),
            request_failures: RefCell::new(VecDeque::new()),
            exit_failures: RefCell::new(VecDeque::new()),
        }
    }
}

impl<N> FakeHost<N, Rejection> {
    /// Fake host whose scripted rejections are [`Rejection`]s.
    /// Use `Default` for other error types.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: Clone, E> FakeHost<N, E> {
    pub fn set_supported(&self, supported: bool) {
        self.supported.set(supported);
    }

    /// Changes the fullscreen element without recording a call, as the user pressing
    /// Escape or browser chrome would. Follow with [`Self::dispatch_change`].
    pub fn set_fullscreen_element(&self, element: Option<N>) {
        *self.element.borrow_mut() = element;
    }

    /// Fires the change notification to every subscribed listener.
    pub fn dispatch_change(&self) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    pub fn calls(&self) -> Vec<HostCall<N>> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn subscribe_count(&self) -> usize {
        self.subscribes.get()
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Whether `listener` is currently subscribed.
    pub fn has_listener(&self, listener: &ChangeListener) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| same_listener(l, listener))
    }

    /// Makes the next `request_fullscreen` reject with `error`.
    pub fn reject_next_request(&self, error: impl Into<E>) {
        self.request_failures.borrow_mut().push_back(error.into());
    }

    /// Makes the next `exit_fullscreen` reject with `error`.
    pub fn reject_next_exit(&self, error: impl Into<E>) {
        self.exit_failures.borrow_mut().push_back(error.into());
    }
}

impl<N, E> FullscreenHost for FakeHost<N, E>
where
    N: Clone + PartialEq + 'static,
    E: 'static,
{
    type Node = N;
    type Error = E;

    fn is_supported(&self) -> bool {
        self.supported.get()
    }

    fn fullscreen_element(&self) -> Option<N> {
        self.element.borrow().clone()
    }

    fn request_fullscreen(&self, node: &N) -> HostFuture<Result<(), E>> {
        self.calls.borrow_mut().push(HostCall::Request(node.clone()));
        if let Some(error) = self.request_failures.borrow_mut().pop_front() {
            return future::ready(Err(error)).boxed_local();
        }
        *self.element.borrow_mut() = Some(node.clone());
        future::ready(Ok(())).boxed_local()
    }

    fn exit_fullscreen(&self) -> HostFuture<Result<(), E>> {
        self.calls.borrow_mut().push(HostCall::Exit);
        if let Some(error) = self.exit_failures.borrow_mut().pop_front() {
            return future::ready(Err(error)).boxed_local();
        }
        *self.element.borrow_mut() = None;
        future::ready(Ok(())).boxed_local()
    }

    fn add_change_listener(&self, listener: &ChangeListener) {
        self.subscribes.set(self.subscribes.get() + 1);
        self.listeners.borrow_mut().push(listener.clone());
    }

    fn remove_change_listener(&self, listener: &ChangeListener) {
        self.unsubscribes.set(self.unsubscribes.get() + 1);
        self.listeners
            .borrow_mut()
            .retain(|l| !same_listener(l, listener));
    }
}
