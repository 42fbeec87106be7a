//! Framework-agnostic core of a fullscreen region: one handle per region, driven by the
//! host's single "current fullscreen element" and its change notification.

pub mod config;
pub mod handle;
pub mod host;
pub mod region;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{PresentationConfig, StyleDeclaration};
pub use handle::FullscreenHandle;
pub use host::{same_listener, ChangeListener, FullscreenHost, HostFuture};
pub use region::{active_style, class_list, ActiveTransitions, ChangeCallback, Region};
