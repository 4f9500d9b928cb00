mod event;
mod reducer;
mod state;

pub use event::Event;
pub use reducer::dispatch;
pub use state::{State, Status, DEFAULT_INPUT};
