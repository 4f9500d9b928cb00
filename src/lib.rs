//! Step-by-step insertion sort.
//!
//! The crate has two parts: [`snapshot`] records every comparison and shift
//! of an insertion sort as an immutable [`Log`] of [`Snapshot`]s, and
//! [`playback`] is the small state machine that walks a viewer through that
//! log (step, auto-play, pause, revert).
//!
//! ```
//! use sortstep::{dispatch, Event, State, Status};
//!
//! let state = State::new("BA");
//! let state = dispatch(state, Event::Step);
//! assert_eq!(state.log().map(|log| log.len()), Some(2));
//! let state = dispatch(state, Event::Step);
//! assert_eq!(state.status(), Status::Done);
//! ```

pub mod playback;
pub mod snapshot;
pub mod symbols;

pub use playback::{dispatch, Event, State, Status, DEFAULT_INPUT};
pub use snapshot::{generate, steps, InsertionSortSteps, Log, Snapshot};
pub use symbols::{parse_symbols, Symbol};
