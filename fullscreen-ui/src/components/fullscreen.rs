//! Fullscreen region component.

use crate::hooks::{use_presentation_config, FullScreenHandle};
use fullscreen_core::{active_style, class_list, Region};
use leptos::*;
use wasm_bindgen::JsCast;

/// Region that the given handle can present fullscreen.
///
/// Renders a `div` carrying the `fullscreen` marker (plus `fullscreen-enabled` while
/// active) and fills the screen only while active. The `div` is the node the handle's
/// `enter`/`exit` act on, so the region must be mounted before those are called.
#[component]
pub fn FullScreen(
    /// Handle bound to this region for its whole lifetime
    handle: FullScreenHandle,
    /// Called with the new state and the handle, once per transition
    #[prop(optional, into)]
    on_change: Option<Callback<(bool, FullScreenHandle)>>,
    /// Extra class emitted before the library markers
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = use_presentation_config();

    // The consumer callback is invoked outside the region's borrow: it may unmount
    // this component, whose cleanup borrows the region again.
    let notify = move |transition: Option<bool>| {
        if let (Some(active), Some(on_change)) = (transition, on_change) {
            on_change.call((active, handle));
        }
    };

    let region = handle.core().map(|core| {
        let mut region = Region::new(core).with_config(config.clone());
        if let Some(class) = &class {
            region = region.with_class(class.clone());
        }
        store_value(region)
    });

    if let Some(region) = region {
        handle.node.on_load(move |div| {
            let element: web_sys::Element = (*div).clone().unchecked_into();
            notify(region.try_update_value(|r| r.mount(element)).flatten());
        });

        // Report transitions of the handle's flag.
        create_effect(move |_| {
            handle.active.get();
            notify(region.try_update_value(|r| r.sync()).flatten());
        });

        on_cleanup(move || {
            region.try_update_value(|r| r.unmount());
        });
    } else {
        log::warn!("FullScreen rendered with a disposed handle");
    }

    let class_config = config.clone();
    let node_ref = handle.node;
    view! {
        <div
            node_ref=node_ref
            class=move || class_list(&class_config, class.as_deref(), handle.active.get())
            style=move || active_style(&config, handle.active.get())
        >
            {children()}
        </div>
    }
}
