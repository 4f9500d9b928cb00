use serde::{Deserialize, Serialize};

/// UI configuration for the TUI
///
/// # Available Themes
/// - `warm` (default): orange accents with teal/indigo markers
/// - `cool`: blue accents with teal/fuchsia markers
/// - `mono`: no colors, markers told apart by modifiers
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: "warm" (default), "cool", or "mono"
    pub theme: String,
    /// Follow the newest snapshot while stepping
    pub follow: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "warm".to_string(),
            follow: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_warm() {
        let config = UiConfig::default();
        assert_eq!(config.theme, "warm");
        assert!(config.follow);
    }

    #[test]
    fn deserialize_theme() {
        let json = r#"{"theme": "cool"}"#;
        let config: UiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, "cool");
        assert!(config.follow);
    }
}
