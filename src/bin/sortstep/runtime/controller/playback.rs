use sortstep::{Event, State, Status};

use super::AppController;

impl AppController {
    /// Feeds one transition through the playback reducer.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let before = Fingerprint::of(&self.state.playback);
        let rows_before = self.state.revealed_rows();
        let reverted = matches!(event, Event::RevertTo(_));
        let playback = std::mem::take(&mut self.state.playback);
        self.state.playback = playback.dispatch(event);
        let rows_after = self.state.revealed_rows();
        if reverted || (rows_after > rows_before && self.state.config.ui.follow) {
            self.state.selection.follow();
        }
        Fingerprint::of(&self.state.playback) != before
    }

    /// Manual step; only offered while idle.
    pub fn step(&mut self) -> bool {
        if self.state.playback.status() != Status::Idle {
            return false;
        }
        self.dispatch(Event::Step)
    }

    /// Play/pause; not offered once the log is exhausted.
    pub fn toggle_playing(&mut self) -> bool {
        if self.state.playback.is_done() {
            return false;
        }
        self.dispatch(Event::TogglePlaying)
    }

    pub fn revert_to_selected(&mut self) -> bool {
        let Some(row) = self.state.selected_row() else {
            return false;
        };
        let target = isize::try_from(row).unwrap_or(isize::MAX);
        self.dispatch(Event::RevertTo(target))
    }

    /// Restarts from whatever the input field holds.
    pub fn reset_from_input(&mut self) -> bool {
        let input = self.state.input.text().to_string();
        self.state.selection.follow();
        self.dispatch(Event::Reset(input));
        true
    }

    pub(super) fn on_playback_tick(&mut self) -> bool {
        if !self.state.playback.is_playing() {
            return false;
        }
        self.dispatch(Event::Step)
    }
}

#[derive(PartialEq, Eq)]
struct Fingerprint {
    status: Status,
    position: usize,
    materialized: bool,
}

impl Fingerprint {
    fn of(state: &State) -> Self {
        Self {
            status: state.status(),
            position: state.position(),
            materialized: state.log().is_some(),
        }
    }
}
