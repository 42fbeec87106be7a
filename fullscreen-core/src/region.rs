//! Presentation side of a fullscreen region: class list, active-only sizing, node
//! attachment and change reporting.

use crate::config::PresentationConfig;
use crate::handle::FullscreenHandle;
use crate::host::FullscreenHost;

/// Builds the region's class attribute.
///
/// The caller's class comes first, then the base marker, then the active marker while
/// active. Blank custom classes are dropped.
pub fn class_list(config: &PresentationConfig, custom: Option<&str>, active: bool) -> String {
    let mut classes: Vec<&str> = Vec::with_capacity(3);
    if let Some(custom) = custom.map(str::trim).filter(|c| !c.is_empty()) {
        classes.push(custom);
    }
    classes.push(&config.base_class);
    if active {
        classes.push(&config.active_class);
    }
    classes.join(" ")
}

/// Inline style for the region: fill the screen while active, nothing otherwise.
pub fn active_style(config: &PresentationConfig, active: bool) -> Option<String> {
    if active {
        config.inline_style()
    } else {
        None
    }
}

/// Turns a stream of observed `active` values into transitions.
///
/// Starts from "not active", so observing `false` first reports nothing while observing
/// `true` first (mounting an already-active handle) is a transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActiveTransitions {
    last: bool,
}

impl ActiveTransitions {
    /// Returns the new value when it differs from the last one observed.
    pub fn observe(&mut self, active: bool) -> Option<bool> {
        if self.last == active {
            return None;
        }
        self.last = active;
        Some(active)
    }
}

/// Consumer callback receiving the new `active` value and the handle.
pub type ChangeCallback<H> = Box<dyn FnMut(bool, &FullscreenHandle<H>)>;

/// A region bound to one handle for its whole lifetime.
pub struct Region<H: FullscreenHost + ?Sized + 'static> {
    handle: FullscreenHandle<H>,
    class_name: Option<String>,
    config: PresentationConfig,
    on_change: Option<ChangeCallback<H>>,
    transitions: ActiveTransitions,
    node: Option<H::Node>,
}

impl<H: FullscreenHost + ?Sized + 'static> Region<H> {
    pub fn new(handle: FullscreenHandle<H>) -> Self {
        Self {
            handle,
            class_name: None,
            config: PresentationConfig::default(),
            on_change: None,
            transitions: ActiveTransitions::default(),
            node: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_config(mut self, config: PresentationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_change(
        mut self,
        callback: impl FnMut(bool, &FullscreenHandle<H>) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn handle(&self) -> &FullscreenHandle<H> {
        &self.handle
    }

    pub fn is_mounted(&self) -> bool {
        self.node.is_some()
    }

    pub fn class_list(&self) -> String {
        class_list(&self.config, self.class_name.as_deref(), self.handle.is_active())
    }

    pub fn style(&self) -> Option<String> {
        active_style(&self.config, self.handle.is_active())
    }

    /// Attaches the rendered root to the handle and reports the initial state if the
    /// handle is already active. Returns the reported value, as [`Self::sync`] does.
    pub fn mount(&mut self, node: H::Node) -> Option<bool> {
        self.handle.attach(node.clone());
        self.node = Some(node);
        self.sync()
    }

    /// Reports a transition of the handle's `active` flag to the change callback.
    /// Returns the new value when a transition was reported.
    ///
    /// Without a registered callback this only records the transition, so a caller that
    /// keeps the region behind a borrow can notify its consumer after releasing it.
    pub fn sync(&mut self) -> Option<bool> {
        let active = self.transitions.observe(self.handle.is_active())?;
        if let Some(callback) = self.on_change.as_mut() {
            callback(active, &self.handle);
        }
        Some(active)
    }

    /// Detaches the region's node from the handle, unless the handle has since been
    /// attached to a different node.
    pub fn unmount(&mut self) {
        let Some(node) = self.node.take() else {
            return;
        };
        if self.handle.node().as_ref() == Some(&node) {
            self.handle.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_without_custom_class() {
        let config = PresentationConfig::default();
        assert_eq!(class_list(&config, None, false), "fullscreen");
        assert_eq!(class_list(&config, None, true), "fullscreen fullscreen-enabled");
    }

    #[test]
    fn test_class_list_puts_custom_class_first() {
        let config = PresentationConfig::default();
        assert_eq!(class_list(&config, Some("foo"), false), "foo fullscreen");
        assert_eq!(
            class_list(&config, Some("foo"), true),
            "foo fullscreen fullscreen-enabled"
        );
    }

    #[test]
    fn test_class_list_ignores_blank_custom_class() {
        let config = PresentationConfig::default();
        assert_eq!(class_list(&config, Some("  "), false), "fullscreen");
    }

    #[test]
    fn test_style_only_while_active() {
        let config = PresentationConfig::default();
        assert_eq!(active_style(&config, false), None);
        assert_eq!(
            active_style(&config, true).as_deref(),
            Some("height: 100%; width: 100%")
        );
    }

    #[test]
    fn test_transitions_start_inactive() {
        let mut transitions = ActiveTransitions::default();
        assert_eq!(transitions.observe(false), None);
        assert_eq!(transitions.observe(true), Some(true));
        assert_eq!(transitions.observe(true), None);
        assert_eq!(transitions.observe(false), Some(false));
    }
}
