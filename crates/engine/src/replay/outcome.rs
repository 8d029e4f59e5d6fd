/// Indicates how a replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every recorded event was delivered without a stop request.
    Completed,

    /// The engine honored a stop request.
    Terminated,
}

/// The result of replaying a trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// How the replay ended.
    pub status: Status,

    /// Number of progress events delivered to the callback.
    pub events_delivered: usize,

    /// Runtime of the last delivered event when the engine stopped on request.
    pub stopped_at: Option<f64>,
}

impl Outcome {
    pub(super) fn completed(events_delivered: usize) -> Self {
        Self {
            status: Status::Completed,
            events_delivered,
            stopped_at: None,
        }
    }

    pub(super) fn terminated(events_delivered: usize, stopped_at: Option<f64>) -> Self {
        Self {
            status: Status::Terminated,
            events_delivered,
            stopped_at,
        }
    }
}
