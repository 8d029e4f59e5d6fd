/// The time and gap of the most recent sufficient gap improvement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Mark {
    pub(super) time: f64,
    pub(super) gap: f64,
}

impl Mark {
    pub(super) fn new(time: f64, gap: f64) -> Self {
        Self { time, gap }
    }
}

/// Lifecycle of a stall controller within one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum State {
    /// No incumbent observed yet, so the gap is undefined.
    AwaitingIncumbent,

    /// Watching the gap since the last improvement.
    Tracking(Mark),

    /// Termination was requested; later events are ignored.
    Terminated(Mark),
}

impl State {
    pub(super) fn mark(&self) -> Option<Mark> {
        match self {
            Self::AwaitingIncumbent => None,
            Self::Tracking(mark) | Self::Terminated(mark) => Some(*mark),
        }
    }
}
