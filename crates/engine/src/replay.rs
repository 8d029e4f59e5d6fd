//! An engine that replays a recorded progress trace.
//!
//! [`ReplayEngine`] stands in for a real branch-and-bound engine: it delivers
//! one progress event per recorded [`Progress`] entry and honors stop requests
//! cooperatively. Use it to exercise observers against traces captured from a
//! real solver log, or hand-built ones in tests.
//!
//! # Cooperative stopping
//!
//! Before delivering each event the engine checks its [`StopHandle`]. With the
//! default latency of zero it stops at the first check after a request. A
//! nonzero [`stop_latency`](ReplayEngine::stop_latency) delivers that many
//! further events first, mimicking an engine that can only stop at a safe
//! point in its search tree.
//!
//! [`StopHandle`]: crate::StopHandle

mod error;
mod outcome;
mod progress;

pub use error::TraceError;
pub use outcome::{Outcome, Status};
pub use progress::Progress;

use stallguard_core::Observer;

use crate::{Action, Event, ProgressCallback};

/// Replays a recorded progress trace through a [`ProgressCallback`].
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    trace: Vec<Progress>,
    stop_latency: usize,
}

impl ReplayEngine {
    /// Creates an engine for a validated trace.
    ///
    /// # Errors
    ///
    /// Returns an error if any runtime is non-finite or negative, or if the
    /// runtimes decrease anywhere in the trace.
    pub fn new(trace: Vec<Progress>) -> Result<Self, TraceError> {
        let mut previous = 0.0;
        for (index, progress) in trace.iter().enumerate() {
            let runtime = progress.runtime;
            if !runtime.is_finite() {
                return Err(TraceError::NonFiniteRuntime { index });
            }
            if runtime < 0.0 {
                return Err(TraceError::NegativeRuntime { index, runtime });
            }
            if runtime < previous {
                return Err(TraceError::DecreasingRuntime {
                    index,
                    runtime,
                    previous,
                });
            }
            previous = runtime;
        }

        Ok(Self {
            trace,
            stop_latency: 0,
        })
    }

    /// Sets how many events are still delivered after a stop is requested.
    #[must_use]
    pub fn stop_latency(mut self, events: usize) -> Self {
        self.stop_latency = events;
        self
    }

    /// Returns the recorded trace.
    #[must_use]
    pub fn trace(&self) -> &[Progress] {
        &self.trace
    }

    /// Runs the trace through the callback until it ends or a stop is honored.
    ///
    /// A stop requested on the final event is reported as
    /// [`Status::Terminated`] even though no events were skipped.
    pub fn run<Obs>(&self, callback: &mut ProgressCallback<Obs>) -> Outcome
    where
        Obs: for<'a> Observer<Event<'a, Progress>, Action>,
    {
        let stop = callback.stop_handle().clone();
        let mut grace = self.stop_latency;
        let mut events_delivered = 0;
        let mut last_runtime = None;

        for progress in &self.trace {
            if stop.is_requested() {
                if grace == 0 {
                    return Outcome::terminated(events_delivered, last_runtime);
                }
                grace -= 1;
            }

            callback.on_progress(progress);
            events_delivered += 1;
            last_runtime = Some(progress.runtime);
        }

        if stop.is_requested() {
            Outcome::terminated(events_delivered, last_runtime)
        } else {
            Outcome::completed(events_delivered)
        }
    }
}
