//! Early termination when the optimality gap stalls.
//!
//! # Policy
//!
//! [`StallTermination`] watches the absolute gap between the best incumbent
//! and the best bound. Each time the gap shrinks by strictly more than
//! [`Config::min_gap_improvement`], the stall clock restarts. Once the clock
//! has run for strictly longer than [`Config::stall_time_limit`], the
//! controller asks the engine to stop.
//!
//! # Observer Events
//!
//! Per event, in order:
//!
//! 1. Without an incumbent the gap is undefined, so nothing happens.
//! 2. The first incumbent starts the clock at that event's time and gap. It
//!    never terminates, since there is nothing to compare against yet.
//! 3. A gap decrease greater than the threshold restarts the clock. Smaller
//!    decreases and increases are jitter and leave the clock running.
//! 4. If the clock has run longer than the limit, the controller returns the
//!    stop action once. Every later event is a no-op, since engines stop
//!    cooperatively and may deliver a few more events first.
//!
//! Both comparisons are strict, so a gap decrease of exactly the threshold is
//! not progress and a stall of exactly the limit does not terminate.
//!
//! # Example
//!
//! ```rust
//! use stallguard_core::{Observer, ProgressSnapshot};
//! use stallguard_engine::Action;
//! use stallguard_observers::stall::{Config, StallTermination};
//!
//! let config = Config::new(30.0, 1e-4).unwrap();
//! let mut stall = StallTermination::new(config);
//!
//! let first = ProgressSnapshot::new(10.0, Some(105.0), 100.0);
//! let later = ProgressSnapshot::new(41.0, Some(105.0), 100.0);
//!
//! assert_eq!(stall.observe(&first), None::<Action>);
//! assert_eq!(stall.observe(&later), Some(Action::Terminate));
//! ```

mod config;
mod state;


pub use config::{Config, ConfigError};

use stallguard_core::{Observer, ProgressSnapshot};

use crate::traits::{CanStopEarly, HasProgress};

use state::{Mark, State};

/// Requests early termination once the gap has stopped improving.
///
/// Create one controller per search. It holds the only mutable state of the
/// policy and must not be shared between concurrent searches.
#[derive(Debug, Clone)]
pub struct StallTermination {
    config: Config,
    state: State,
}

impl StallTermination {
    /// Creates a controller for one search.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::AwaitingIncumbent,
        }
    }

    /// Returns the controller's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the elapsed time at which the gap last improved.
    ///
    /// `None` until the first incumbent has been observed.
    #[must_use]
    pub fn last_gap_improvement_time(&self) -> Option<f64> {
        self.state.mark().map(|mark| mark.time)
    }

    /// Returns the gap recorded at the last improvement.
    ///
    /// `None` until the first incumbent has been observed.
    #[must_use]
    pub fn last_observed_gap(&self) -> Option<f64> {
        self.state.mark().map(|mark| mark.gap)
    }

    /// Returns `true` once the controller has asked the engine to stop.
    #[must_use]
    pub fn has_requested_termination(&self) -> bool {
        matches!(self.state, State::Terminated(_))
    }

    /// Returns how long the gap has gone without improving at `elapsed`.
    ///
    /// `None` until the first incumbent has been observed.
    #[must_use]
    pub fn stalled_for(&self, elapsed: f64) -> Option<f64> {
        self.last_gap_improvement_time().map(|time| elapsed - time)
    }

    /// Advances the policy by one snapshot.
    ///
    /// Returns `true` exactly once, on the event that triggers termination.
    fn advance(&mut self, snapshot: &ProgressSnapshot) -> bool {
        let Some(gap) = snapshot.gap() else {
            return false;
        };
        let elapsed = snapshot.elapsed();

        let mark = match self.state {
            State::AwaitingIncumbent if gap.is_nan() || !elapsed.is_finite() => {
                log::warn!("ignoring unusable first incumbent: gap={gap}, t={elapsed}");
                return false;
            }
            State::AwaitingIncumbent => {
                log::debug!("first incumbent at t={elapsed:.3}s, gap={gap:.6e}");
                self.state = State::Tracking(Mark::new(elapsed, gap));
                return false;
            }
            State::Tracking(mark) => mark,
            State::Terminated(_) => return false,
        };

        let mark = if mark.gap - gap > self.config.min_gap_improvement() {
            log::debug!(
                "gap improved {:.6e} -> {gap:.6e} at t={elapsed:.3}s",
                mark.gap
            );
            let improved = Mark::new(elapsed.max(mark.time), gap);
            self.state = State::Tracking(improved);
            improved
        } else {
            mark
        };

        let stalled_for = elapsed - mark.time;
        if stalled_for > self.config.stall_time_limit() {
            log::info!(
                "terminating search: gap {gap:.6e} has not improved by more than {:.3e} \
                 for {stalled_for:.3}s (limit {:.3}s)",
                self.config.min_gap_improvement(),
                self.config.stall_time_limit(),
            );
            self.state = State::Terminated(mark);
            return true;
        }

        false
    }
}

impl<E, A> Observer<E, A> for StallTermination
where
    E: HasProgress,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.advance(&event.progress()).then(A::stop_early)
    }
}
