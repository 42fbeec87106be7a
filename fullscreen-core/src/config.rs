//! Presentation settings for fullscreen regions.
//!
//! Defaults match the stock stylesheet hooks: every region carries `fullscreen`, the
//! active one also carries `fullscreen-enabled` and stretches to fill the screen.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_CLASS: &str = "fullscreen";
pub const DEFAULT_ACTIVE_CLASS: &str = "fullscreen-enabled";

/// One inline CSS declaration, e.g. `height: 100%`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Class names and inline style applied by a region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Marker class present on every region
    pub base_class: String,
    /// Marker class appended while the region's handle is active
    pub active_class: String,
    /// Inline declarations applied only while active
    pub active_style: Vec<StyleDeclaration>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            active_style: vec![
                StyleDeclaration::new("height", "100%"),
                StyleDeclaration::new("width", "100%"),
            ],
        }
    }
}

impl PresentationConfig {
    /// Renders `active_style` as an inline `style` attribute value.
    /// Returns None when no declarations are configured.
    pub fn inline_style(&self) -> Option<String> {
        if self.active_style.is_empty() {
            return None;
        }
        let style = self
            .active_style
            .iter()
            .map(|d| format!("{}: {}", d.property, d.value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inline_style_fills_both_dimensions() {
        let config = PresentationConfig::default();
        assert_eq!(
            config.inline_style().as_deref(),
            Some("height: 100%; width: 100%")
        );
    }

    #[test]
    fn test_empty_style_renders_nothing() {
        let config = PresentationConfig {
            active_style: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.inline_style(), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PresentationConfig =
            serde_json::from_str(r#"{"active_class": "is-fullscreen"}"#).unwrap();

        assert_eq!(config.base_class, DEFAULT_BASE_CLASS);
        assert_eq!(config.active_class, "is-fullscreen");
        assert_eq!(config.active_style.len(), 2);
    }
}
