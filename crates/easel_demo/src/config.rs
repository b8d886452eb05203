//! Host-facing component configuration

use serde::{Deserialize, Serialize};

/// Configuration for the dual-scope component.
///
/// Re-mounting with a new configuration rebuilds both scopes from a clean
/// state; nothing carries over.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Scene width in pixels
    #[serde(default = "default_width")]
    pub width: f32,
    /// Scene height in pixels
    #[serde(default = "default_height")]
    pub height: f32,
    /// Register frame callbacks on mount
    #[serde(default = "default_animated")]
    pub animated: bool,
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    400.0
}

fn default_animated() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            animated: default_animated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: DemoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 400.0);
        assert!(config.animated);

        let config: DemoConfig = serde_json::from_str(r#"{"animated": false}"#).unwrap();
        assert!(!config.animated);
    }
}
