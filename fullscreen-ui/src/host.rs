//! Browser implementation of the fullscreen host.
//!
//! Normalizes the standard, `webkit`- and `moz`-prefixed Fullscreen API. The vendor is detected
//! once when the host is created.

use crate::error::FullscreenError;
use fullscreen_core::{same_listener, ChangeListener, FullscreenHost, HostFuture};
use std::cell::RefCell;
use std::future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event};

/// Naming scheme of the Fullscreen API exposed by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Standard,
    Webkit,
    Moz,
}

impl Vendor {
    const ALL: [Vendor; 3] = [Vendor::Standard, Vendor::Webkit, Vendor::Moz];

    pub const fn request_method(self) -> &'static str {
        match self {
            Self::Standard => "requestFullscreen",
            Self::Webkit => "webkitRequestFullscreen",
            Self::Moz => "mozRequestFullScreen",
        }
    }

    pub const fn exit_method(self) -> &'static str {
        match self {
            Self::Standard => "exitFullscreen",
            Self::Webkit => "webkitExitFullscreen",
            Self::Moz => "mozCancelFullScreen",
        }
    }

    pub const fn element_property(self) -> &'static str {
        match self {
            Self::Standard => "fullscreenElement",
            Self::Webkit => "webkitFullscreenElement",
            Self::Moz => "mozFullScreenElement",
        }
    }

    pub const fn enabled_property(self) -> &'static str {
        match self {
            Self::Standard => "fullscreenEnabled",
            Self::Webkit => "webkitFullscreenEnabled",
            Self::Moz => "mozFullScreenEnabled",
        }
    }

    pub const fn change_event(self) -> &'static str {
        match self {
            Self::Standard => "fullscreenchange",
            Self::Webkit => "webkitfullscreenchange",
            Self::Moz => "mozfullscreenchange",
        }
    }

    /// First vendor whose exit method exists on `document`.
    pub fn detect(document: &Document) -> Option<Self> {
        Self::ALL.into_iter().find(|vendor| {
            js_sys::Reflect::has(document, &JsValue::from_str(vendor.exit_method()))
                .unwrap_or(false)
        })
    }
}

type EventClosure = Closure<dyn FnMut(Event)>;

/// Fullscreen host backed by `window.document`.
pub struct WebFullscreenHost {
    document: Option<Document>,
    vendor: Option<Vendor>,
    listeners: RefCell<Vec<(ChangeListener, EventClosure)>>,
}

impl Default for WebFullscreenHost {
    fn default() -> Self {
        Self::new()
    }
}

impl WebFullscreenHost {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let vendor = document.as_ref().and_then(Vendor::detect);
        match vendor {
            Some(vendor) => log::debug!("Fullscreen API detected: {vendor:?}"),
            None => log::debug!("Fullscreen API not available"),
        }

        Self {
            document,
            vendor,
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn vendor(&self) -> Option<Vendor> {
        self.vendor
    }
}

impl FullscreenHost for WebFullscreenHost {
    type Node = Element;
    type Error = FullscreenError;

    fn is_supported(&self) -> bool {
        let (Some(document), Some(vendor)) = (&self.document, self.vendor) else {
            return false;
        };
        js_sys::Reflect::get(document, &JsValue::from_str(vendor.enabled_property()))
            .map(|enabled| enabled.is_truthy())
            .unwrap_or(false)
    }

    fn fullscreen_element(&self) -> Option<Element> {
        let (Some(document), Some(vendor)) = (&self.document, self.vendor) else {
            return None;
        };
        js_sys::Reflect::get(document, &JsValue::from_str(vendor.element_property()))
            .ok()?
            .dyn_into::<Element>()
            .ok()
    }

    fn request_fullscreen(&self, node: &Element) -> HostFuture<Result<(), FullscreenError>> {
        match self.vendor {
            Some(vendor) => call_method(node, vendor.request_method()),
            None => Box::pin(future::ready(Ok(()))),
        }
    }

    fn exit_fullscreen(&self) -> HostFuture<Result<(), FullscreenError>> {
        match (&self.document, self.vendor) {
            (Some(document), Some(vendor)) => call_method(document, vendor.exit_method()),
            _ => Box::pin(future::ready(Ok(()))),
        }
    }

    fn add_change_listener(&self, listener: &ChangeListener) {
        let (Some(document), Some(vendor)) = (&self.document, self.vendor) else {
            return;
        };

        let callback = Rc::clone(listener);
        let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| callback());

        let added = document.add_event_listener_with_callback(
            vendor.change_event(),
            closure.as_ref().unchecked_ref(),
        );
        match added {
            Ok(()) => self
                .listeners
                .borrow_mut()
                .push((Rc::clone(listener), closure)),
            Err(e) => log::warn!("Failed to add {} listener: {:?}", vendor.change_event(), e),
        }
    }

    fn remove_change_listener(&self, listener: &ChangeListener) {
        let (Some(document), Some(vendor)) = (&self.document, self.vendor) else {
            return;
        };

        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            listeners
                .iter()
                .position(|(registered, _)| same_listener(registered, listener))
                .map(|index| listeners.remove(index))
        };

        if let Some((_, closure)) = removed {
            if let Err(e) = document.remove_event_listener_with_callback(
                vendor.change_event(),
                closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("Failed to remove {} listener: {:?}", vendor.change_event(), e);
            }
        }
    }
}

/// Calls `target[name]()` and bridges the result.
/// A returned promise settles the future; legacy `undefined` resolves at once; a throw
/// rejects.
fn call_method(target: &JsValue, name: &'static str) -> HostFuture<Result<(), FullscreenError>> {
    let method = match js_sys::Reflect::get(target, &JsValue::from_str(name)) {
        Ok(value) => value.dyn_into::<js_sys::Function>().ok(),
        Err(_) => None,
    };
    let Some(method) = method else {
        return Box::pin(future::ready(Err(FullscreenError::MissingMethod(name))));
    };

    match method.call0(target) {
        Err(thrown) => Box::pin(future::ready(Err(FullscreenError::Rejected(thrown)))),
        Ok(returned) => match returned.dyn_into::<js_sys::Promise>() {
            Ok(promise) => {
                let pending = JsFuture::from(promise);
                Box::pin(async move {
                    pending
                        .await
                        .map(|_| ())
                        .map_err(FullscreenError::Rejected)
                })
            }
            Err(_) => Box::pin(future::ready(Ok(()))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_names_are_consistent() {
        assert_eq!(Vendor::Standard.change_event(), "fullscreenchange");
        assert_eq!(Vendor::Webkit.change_event(), "webkitfullscreenchange");
        assert_eq!(Vendor::Webkit.request_method(), "webkitRequestFullscreen");
        assert_eq!(Vendor::Moz.change_event(), "mozfullscreenchange");
        assert_eq!(Vendor::Moz.exit_method(), "mozCancelFullScreen");
        for vendor in Vendor::ALL {
            let element = vendor.element_property().to_lowercase();
            let enabled = vendor.enabled_property().to_lowercase();
            assert!(element.ends_with("fullscreenelement"));
            assert!(enabled.ends_with("fullscreenenabled"));
            assert!(vendor.change_event().ends_with("fullscreenchange"));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_detects_a_vendor_in_browser() {
        let host = WebFullscreenHost::new();
        assert!(host.vendor().is_some());
        assert!(host.fullscreen_element().is_none());
    }

    #[wasm_bindgen_test]
    fn test_change_listener_receives_dispatched_event() {
        let host = WebFullscreenHost::new();
        let vendor = host.vendor().unwrap();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = Rc::clone(&hits);
        let listener: ChangeListener = Rc::new(move || hits_clone.set(hits_clone.get() + 1));
        let document = web_sys::window().unwrap().document().unwrap();
        let fire = || {
            let event = Event::new(vendor.change_event()).unwrap();
            document.dispatch_event(&event).unwrap();
        };

        host.add_change_listener(&listener);
        fire();
        host.remove_change_listener(&listener);
        fire();

        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_detects_prefixed_vendor_from_exit_method() {
        let document = web_sys::window().unwrap().document().unwrap();
        let detected = Vendor::detect(&document).unwrap();
        let expected = Vendor::ALL.into_iter().find(|v| {
            js_sys::Reflect::has(&document, &JsValue::from_str(v.exit_method())).unwrap()
        });
        assert_eq!(Some(detected), expected);
    }

    #[wasm_bindgen_test]
    async fn test_missing_method_is_reported() {
        let target = js_sys::Object::new();
        let result = call_method(&target, "requestFullscreen").await;
        assert!(matches!(
            result,
            Err(FullscreenError::MissingMethod("requestFullscreen"))
        ));
    }
}
