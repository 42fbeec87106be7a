//! Platform contract for the host's single fullscreen element.
//!
//! A host owns exactly one global "current fullscreen element". Handles read it, mutate it
//! only through `request_fullscreen`/`exit_fullscreen`, and learn about changes through
//! the change notification. Keeping it behind a trait lets tests swap in a deterministic
//! fake.

use futures::future::LocalBoxFuture;
use std::rc::Rc;

/// Object-safe boxed future returned by [`FullscreenHost`] operations.
pub type HostFuture<T> = LocalBoxFuture<'static, T>;

/// Callback fired whenever the host's fullscreen element changes, for any reason.
///
/// Listeners are identified by `Rc` allocation, so removal must pass the same
/// `ChangeListener` that was added.
pub type ChangeListener = Rc<dyn Fn()>;

/// Returns true when both listeners are the same allocation.
pub fn same_listener(a: &ChangeListener, b: &ChangeListener) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Host fullscreen capability, already normalized across vendors.
pub trait FullscreenHost {
    /// View node the host can present fullscreen. Equality is node identity.
    type Node: Clone + PartialEq + 'static;
    /// Rejection produced by the platform, passed to callers unmodified.
    type Error: 'static;

    /// Capability probe. When false, handles treat enter/exit as no-ops.
    fn is_supported(&self) -> bool {
        true
    }

    /// Synchronous read of the global fullscreen element.
    fn fullscreen_element(&self) -> Option<Self::Node>;

    /// Asks the host to present `node` fullscreen. The platform call is made before
    /// this returns; the future settles with the platform's answer.
    fn request_fullscreen(&self, node: &Self::Node) -> HostFuture<Result<(), Self::Error>>;

    /// Asks the host to clear the current fullscreen element.
    fn exit_fullscreen(&self) -> HostFuture<Result<(), Self::Error>>;

    /// Subscribes `listener` to the change notification.
    fn add_change_listener(&self, listener: &ChangeListener);

    /// Unsubscribes a listener previously passed to [`Self::add_change_listener`].
    fn remove_change_listener(&self, listener: &ChangeListener);
}

impl<H: FullscreenHost + ?Sized> FullscreenHost for Rc<H> {
    type Node = H::Node;
    type Error = H::Error;

    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn fullscreen_element(&self) -> Option<Self::Node> {
        (**self).fullscreen_element()
    }

    fn request_fullscreen(&self, node: &Self::Node) -> HostFuture<Result<(), Self::Error>> {
        (**self).request_fullscreen(node)
    }

    fn exit_fullscreen(&self) -> HostFuture<Result<(), Self::Error>> {
        (**self).exit_fullscreen()
    }

    fn add_change_listener(&self, listener: &ChangeListener) {
        (**self).add_change_listener(listener)
    }

    fn remove_change_listener(&self, listener: &ChangeListener) {
        (**self).remove_change_listener(listener)
    }
}
