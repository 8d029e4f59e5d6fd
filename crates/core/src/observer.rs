/// Reacts to progress events pushed by a running search.
///
/// The engine calls [`observe`](Self::observe) synchronously from its own
/// search loop, once per event and never concurrently for the same search.
/// Events arrive at whatever cadence the engine chooses, so an observer must
/// not assume uniform spacing, and it runs inline on the engine's hot path:
/// each call should be cheap, non-blocking, and free of I/O.
///
/// Returning `Some(action)` asks the engine to act (for example, to stop);
/// `None` leaves the search alone. Engines may keep delivering events after an
/// action was requested, so observers should tolerate being called again.
pub trait Observer<E, A> {
    /// Handles one progress event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Any `FnMut(&E) -> Option<A>` closure observes events directly.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Watches nothing: `()` never requests an action.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
