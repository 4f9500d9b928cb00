/// Transitions accepted by [`dispatch`](super::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Materialize the log on first use, then advance one snapshot
    Step,
    /// Flip between idle and playing
    TogglePlaying,
    /// Replace the input and drop the recorded log
    Reset(String),
    /// Jump to a recorded position; out-of-range targets are clamped
    RevertTo(isize),
}
