mod app;
mod logging;
mod playback;
mod ui;

const DEFAULT_INTERVAL_MS: u64 = 250;
const MIN_INTERVAL_MS: u64 = 10;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use playback::PlaybackConfig;
pub use ui::UiConfig;
