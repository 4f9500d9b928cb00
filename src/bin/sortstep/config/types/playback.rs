use std::time::Duration;

use serde::{Deserialize, Serialize};
use sortstep::DEFAULT_INPUT;

use super::{DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS};

/// Playback settings for the interactive view
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Text loaded into the input field at startup
    pub default_input: String,
    /// Delay between automatic steps while playing
    pub interval_ms: u64,
}

impl PlaybackConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_input: DEFAULT_INPUT.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_quarter_second() {
        assert_eq!(PlaybackConfig::default().interval(), Duration::from_millis(250));
    }

    #[test]
    fn interval_has_a_floor() {
        let config = PlaybackConfig {
            interval_ms: 0,
            ..PlaybackConfig::default()
        };
        assert_eq!(config.interval(), Duration::from_millis(MIN_INTERVAL_MS));
    }

    #[test]
    fn deserialize_input_only() {
        let json = r#"{"default_input": "HELLO"}"#;
        let config: PlaybackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_input, "HELLO");
        assert_eq!(config.interval_ms, DEFAULT_INTERVAL_MS);
    }
}
