mod fullscreen;

pub use fullscreen::{
    provide_fullscreen_host, provide_presentation_config, spawn_action,
    use_fullscreen_handle, use_fullscreen_handle_with, use_presentation_config, CoreHandle,
    FullScreenHandle, SharedHost,
};
