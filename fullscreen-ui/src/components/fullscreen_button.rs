// fullscreen-ui/src/components/fullscreen_button.rs
use crate::error::FullscreenError;
use crate::hooks::{spawn_action, FullScreenHandle};
use leptos::*;

#[component]
fn MaximizeIcon() -> impl IntoView {
    view! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M8 3H5a2 2 0 0 0-2 2v3m18 0V5a2 2 0 0 0-2-2h-3m0 18h3a2 2 0 0 0 2-2v-3M3 16v3a2 2 0 0 0 2 2h3"/>
        </svg>
    }
}

#[component]
fn MinimizeIcon() -> impl IntoView {
    view! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M8 3v3a2 2 0 0 1-2 2H3m18 0h-3a2 2 0 0 1-2-2V3m0 18v-3a2 2 0 0 1 2-2h3M3 16h3a2 2 0 0 1 2 2v3"/>
        </svg>
    }
}

/// Toggles `handle` and shows the matching icon.
#[component]
pub fn FullscreenButton(
    handle: FullScreenHandle,
    /// Receives the browser's rejection when the toggle fails
    #[prop(into)]
    on_error: Callback<FullscreenError>,
) -> impl IntoView {
    view! {
        <button
            class="fullscreen-toggle"
            on:click=move |_| spawn_action(handle.toggle(), move |e| on_error.call(e))
        >
            {move || if handle.active.get() {
                view! { <MinimizeIcon /> }.into_view()
            } else {
                view! { <MaximizeIcon /> }.into_view()
            }}
        </button>
    }
}
