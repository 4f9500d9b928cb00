use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
}

#[derive(Debug)]
pub enum AppEvent {
    Input(InputEvent),
    /// Fired on the playback period; only steps while playing.
    PlaybackTick,
}
