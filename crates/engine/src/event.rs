use stallguard_core::ProgressSnapshot;

use crate::query::{ProgressQuery, snapshot_of};

/// A progress event delivered by the engine to an observer.
///
/// The event borrows the engine's native query for the duration of one
/// callback, and carries the [`ProgressSnapshot`] read from it.
#[derive(Debug)]
pub struct Event<'a, Q: ?Sized> {
    query: &'a Q,
    snapshot: ProgressSnapshot,
}

impl<'a, Q: ProgressQuery + ?Sized> Event<'a, Q> {
    pub(crate) fn new(query: &'a Q) -> Self {
        Self {
            query,
            snapshot: snapshot_of(query),
        }
    }

    /// Returns the native query this event was built from.
    #[must_use]
    pub fn query(&self) -> &'a Q {
        self.query
    }

    /// Returns the snapshot read from the query.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot
    }
}
