//! Leptos bindings for fullscreen regions: a browser host, the `use_fullscreen_handle`
//! hook and the `FullScreen` component.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod error;
pub mod hooks;
pub mod host;

pub use components::{FullScreen, FullscreenButton};
pub use error::FullscreenError;
pub use fullscreen_core::{PresentationConfig, StyleDeclaration};
pub use hooks::{
    provide_fullscreen_host, provide_presentation_config, use_fullscreen_handle,
    use_fullscreen_handle_with, FullScreenHandle, SharedHost,
};
pub use host::{Vendor, WebFullscreenHost};

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(app::App);
}
