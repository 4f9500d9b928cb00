pub mod controller;
mod events;
mod overlay;
mod runner;
mod selection;
mod state;
mod terminal;

pub use events::{AppEvent, InputEvent};
pub use overlay::OverlayState;
pub use runner::run_app;
pub use state::{AppState, Focus};
pub use terminal::{init_terminal, restore_terminal, AppTerminal};
