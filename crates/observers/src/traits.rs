//! Capability traits for cross-engine observers.
//!
//! These traits abstract over engine-specific event and action types, enabling
//! observers to work generically across different engines.
//!
//! # Event traits
//!
//! - [`HasProgress`] — events that carry a [`ProgressSnapshot`]
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stallguard_core::Observer;
//! use stallguard_observers::traits::{CanStopEarly, HasProgress};
//!
//! struct GapBelow {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for GapBelow {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let gap = event.progress().gap()?;
//!         (gap < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use stallguard_core::ProgressSnapshot;
use stallguard_engine::{Action, Event, ProgressQuery};

/// An event that carries search progress.
pub trait HasProgress {
    /// Returns the progress snapshot for this event.
    fn progress(&self) -> ProgressSnapshot;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl HasProgress for ProgressSnapshot {
    fn progress(&self) -> ProgressSnapshot {
        *self
    }
}

// --- HasProgress for engine::Event ---

impl<Q> HasProgress for Event<'_, Q>
where
    Q: ProgressQuery + ?Sized,
{
    fn progress(&self) -> ProgressSnapshot {
        self.snapshot()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::Terminate
    }
}
