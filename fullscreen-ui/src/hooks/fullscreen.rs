// fullscreen-ui/src/hooks/fullscreen.rs
use crate::error::FullscreenError;
use crate::host::WebFullscreenHost;
use fullscreen_core::{FullscreenHandle, FullscreenHost, HostFuture, PresentationConfig};
use leptos::*;
use std::future;
use std::rc::Rc;

/// Host shared by every handle in the app.
pub type SharedHost = Rc<dyn FullscreenHost<Node = web_sys::Element, Error = FullscreenError>>;

/// Framework-agnostic handle behind a [`FullScreenHandle`].
pub type CoreHandle =
    FullscreenHandle<dyn FullscreenHost<Node = web_sys::Element, Error = FullscreenError>>;

thread_local! {
    /// Browser host used when no host was provided through context.
    static DEFAULT_HOST: SharedHost = Rc::new(WebFullscreenHost::new());
}

#[derive(Clone)]
struct HostContext(SharedHost);

/// Makes `host` the fullscreen host for handles created below this point.
pub fn provide_fullscreen_host(host: SharedHost) {
    provide_context(HostContext(host));
}

/// Overrides class names and active style for regions below this point.
pub fn provide_presentation_config(config: PresentationConfig) {
    provide_context(config);
}

pub fn use_presentation_config() -> PresentationConfig {
    use_context::<PresentationConfig>().unwrap_or_default()
}

/// Reactive handle for one fullscreenable region.
///
/// `active` follows the host's change notification. After awaiting `enter()` it may still
/// read `false` until the browser fires `fullscreenchange`.
#[derive(Clone, Copy)]
pub struct FullScreenHandle {
    pub active: ReadSignal<bool>,
    pub node: NodeRef<html::Div>,
    core: StoredValue<CoreHandle>,
}

impl FullScreenHandle {
    /// Enters fullscreen for this region, exiting any other fullscreen element first.
    /// Call from the event handler itself: the first browser call is made before this
    /// returns.
    pub fn enter(&self) -> HostFuture<Result<(), FullscreenError>> {
        self.core
            .try_with_value(|core| core.enter())
            .unwrap_or_else(|| Box::pin(future::ready(Ok(()))))
    }

    /// Exits fullscreen if this region is the fullscreen element.
    pub fn exit(&self) -> HostFuture<Result<(), FullscreenError>> {
        self.core
            .try_with_value(|core| core.exit())
            .unwrap_or_else(|| Box::pin(future::ready(Ok(()))))
    }

    pub fn toggle(&self) -> HostFuture<Result<(), FullscreenError>> {
        self.core
            .try_with_value(|core| core.toggle())
            .unwrap_or_else(|| Box::pin(future::ready(Ok(()))))
    }

    pub fn core(&self) -> Option<CoreHandle> {
        self.core.try_get_value()
    }
}

impl PartialEq for FullScreenHandle {
    fn eq(&self, other: &Self) -> bool {
        match (self.core(), other.core()) {
            (Some(a), Some(b)) => a.ptr_eq(&b),
            _ => false,
        }
    }
}

/// Creates a handle on the context host, or the browser host if none was provided.
pub fn use_fullscreen_handle() -> FullScreenHandle {
    let host = use_context::<HostContext>()
        .map(|HostContext(host)| host)
        .unwrap_or_else(|| DEFAULT_HOST.with(Rc::clone));
    use_fullscreen_handle_with(host)
}

/// Creates a handle on `host`. Subscribes to the change notification now and
/// unsubscribes when the owning scope is cleaned up.
pub fn use_fullscreen_handle_with(host: SharedHost) -> FullScreenHandle {
    let (active, set_active) = create_signal(false);
    let node = create_node_ref::<html::Div>();

    let core = CoreHandle::new(host);
    core.set_active_observer(move |is_active| set_active.set(is_active));
    core.open();

    let cleanup_core = core.clone();
    on_cleanup(move || cleanup_core.close());

    FullScreenHandle {
        active,
        node,
        core: store_value(core),
    }
}

/// Drives an action future to completion, handing a rejection to `on_error`.
pub fn spawn_action(
    pending: HostFuture<Result<(), FullscreenError>>,
    on_error: impl FnOnce(FullscreenError) + 'static,
) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = pending.await {
            on_error(e);
        }
    });
}
