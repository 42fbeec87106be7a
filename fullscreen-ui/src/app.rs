//! Two-region demo: each region can be entered from outside, switched to the other
//! region while fullscreen, or exited.

use crate::components::{FullScreen, FullscreenButton};
use crate::error::FullscreenError;
use crate::hooks::{spawn_action, use_fullscreen_handle, FullScreenHandle};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let screen1 = use_fullscreen_handle();
    let screen2 = use_fullscreen_handle();

    let report_change = Callback::new(move |(state, handle): (bool, FullScreenHandle)| {
        if handle == screen1 {
            log::info!("Screen 1 went to {state}");
        }
        if handle == screen2 {
            log::info!("Screen 2 went to {state}");
        }
    });

    let log_error = Callback::new(|e: FullscreenError| log::error!("{e}"));

    // Each action is started inside the click handler so the browser sees the gesture.
    let enter = move |handle: FullScreenHandle| {
        spawn_action(handle.enter(), move |e| log_error.call(e));
    };
    let exit = move |handle: FullScreenHandle| {
        spawn_action(handle.exit(), move |e| log_error.call(e));
    };

    view! {
        <div>
            <button on:click=move |_| enter(screen1)>"First"</button>
            <button on:click=move |_| enter(screen2)>"Second"</button>
            <FullscreenButton handle=screen1 on_error=log_error />

            <FullScreen handle=screen1 on_change=report_change>
                <div class="full-screenable-node" style="background: red;">
                    "First"
                    <button on:click=move |_| enter(screen2)>"Switch"</button>
                    <button on:click=move |_| exit(screen1)>"Exit"</button>
                </div>
            </FullScreen>

            <FullScreen handle=screen2 on_change=report_change class="second-screen">
                <div class="full-screenable-node" style="background: green;">
                    "Second"
                    <button on:click=move |_| enter(screen1)>"Switch"</button>
                    <button on:click=move |_| exit(screen2)>"Exit"</button>
                </div>
            </FullScreen>
        </div>
    }
}
