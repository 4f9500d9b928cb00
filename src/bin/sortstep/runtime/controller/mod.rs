mod input;
mod playback;

use crate::runtime::{AppEvent, AppState};

pub struct AppController {
    pub state: AppState,
}

impl AppController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Returns whether the screen needs a redraw.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Input(input) => input::handle_input(self, input),
            AppEvent::PlaybackTick => self.on_playback_tick(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_controller(input: &str) -> AppController {
    let mut config = crate::config::AppConfig::default();
    config.playback.default_input = input.to_string();
    let state = AppState::new(config, crate::terminal::TerminalCapabilities::default());
    AppController::new(state)
}
