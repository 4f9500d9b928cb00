use serde::{Deserialize, Serialize};

use super::{LoggingConfig, PlaybackConfig, UiConfig};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub playback: PlaybackConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}
