pub mod fullscreen;
pub mod fullscreen_button;

pub use fullscreen::FullScreen;
pub use fullscreen_button::FullscreenButton;
