use std::fmt;

use serde::Serialize;

use crate::snapshot::{Log, Snapshot};

/// Input shown when nothing else is configured.
pub const DEFAULT_INPUT: &str = "INSERTIONSORT";

/// Playback mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Waiting for a manual step or for playback to start
    #[default]
    Idle,
    /// An external driver is issuing steps on a fixed period
    Playing,
    /// The log is exhausted; steps are ignored until the next reset
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session view over one input and its recorded log.
///
/// Only [`dispatch`](super::dispatch) produces new states, which keeps the
/// position inside the log and `Done` pinned to the final snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub(super) status: Status,
    pub(super) input: String,
    pub(super) log: Option<Log>,
    pub(super) position: usize,
}

impl State {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            status: Status::Idle,
            input: input.into(),
            log: None,
            position: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Recorded log, absent until the first step after a reset.
    pub fn log(&self) -> Option<&Log> {
        self.log.as_ref()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Snapshot at the current position.
    pub fn current(&self) -> Option<&Snapshot> {
        self.log.as_ref().and_then(|log| log.get(self.position))
    }

    /// Snapshots from the start of the log up to and including the current one.
    pub fn revealed(&self) -> &[Snapshot] {
        match &self.log {
            Some(log) if !log.is_empty() => &log.as_slice()[..=self.position],
            _ => &[],
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}
