use crate::snapshot::{generate, Log};
use crate::symbols::parse_symbols;

use super::{Event, State, Status};

/// Applies one transition and returns the resulting state.
///
/// Total: every state/event pair yields a valid state.
pub fn dispatch(state: State, event: Event) -> State {
    log::trace!(
        "dispatch {:?} at {} (position {})",
        event,
        state.status,
        state.position
    );
    match event {
        Event::Step => step(state),
        Event::TogglePlaying => toggle_playing(state),
        Event::Reset(input) => reset(input),
        Event::RevertTo(target) => revert_to(state, target),
    }
}

impl State {
    pub fn dispatch(self, event: Event) -> Self {
        dispatch(self, event)
    }
}

fn step(state: State) -> State {
    if state.status == Status::Done {
        return state;
    }
    let Some(last) = state.log.as_ref().map(Log::last_index) else {
        return materialize(state);
    };
    let next = state.position + 1;
    if next >= last {
        State {
            status: Status::Done,
            position: last,
            ..state
        }
    } else {
        State {
            position: next,
            ..state
        }
    }
}

fn materialize(state: State) -> State {
    let log = generate(&parse_symbols(&state.input));
    log::debug!("materialized {} snapshots for {:?}", log.len(), state.input);
    // Zero or one snapshot: position 0 is already the final one.
    let status = if log.len() <= 1 {
        Status::Done
    } else {
        state.status
    };
    State {
        status,
        log: Some(log),
        position: 0,
        ..state
    }
}

fn toggle_playing(state: State) -> State {
    // Done -> Playing is reachable but inert: the next step lands on Done again.
    let status = match state.status {
        Status::Idle | Status::Done => Status::Playing,
        Status::Playing => Status::Idle,
    };
    State { status, ..state }
}

fn reset(input: String) -> State {
    State::new(input)
}

fn revert_to(state: State, target: isize) -> State {
    let last = state.log.as_ref().map_or(0, Log::last_index);
    let position = usize::try_from(target).unwrap_or(0).min(last);
    let status = if position == last {
        Status::Done
    } else {
        Status::Idle
    };
    log::debug!("revert to {target} -> position {position} ({status})");
    State {
        status,
        position,
        ..state
    }
}
