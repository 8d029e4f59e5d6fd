use stallguard_core::Observer;

use crate::{Action, Event, ProgressQuery, StopHandle};

/// Adapts an [`Observer`] to an engine's progress callback.
///
/// One callback is constructed per search and handed to the engine, which
/// calls [`on_progress`](Self::on_progress) once per progress event. The
/// callback converts the native query into an [`Event`], forwards it to the
/// observer, and turns [`Action::Terminate`] into a request on its
/// [`StopHandle`]. It adds no policy of its own.
#[derive(Debug)]
pub struct ProgressCallback<Obs> {
    observer: Obs,
    stop: StopHandle,
}

impl<Obs> ProgressCallback<Obs> {
    /// Creates a callback with a fresh stop handle.
    pub fn new(observer: Obs) -> Self {
        Self::with_stop_handle(observer, StopHandle::new())
    }

    /// Creates a callback that signals through an existing stop handle.
    ///
    /// Use this when the engine (or an outside canceller) already owns the
    /// handle it polls.
    pub fn with_stop_handle(observer: Obs, stop: StopHandle) -> Self {
        Self { observer, stop }
    }

    /// Handles one progress event.
    ///
    /// Returns the action the observer requested, if any.
    pub fn on_progress<Q>(&mut self, query: &Q) -> Option<Action>
    where
        Q: ProgressQuery + ?Sized,
        Obs: for<'a> Observer<Event<'a, Q>, Action>,
    {
        let event = Event::new(query);
        let action = self.observer.observe(&event);

        if action == Some(Action::Terminate) && !self.stop.request() {
            log::debug!(
                "stop already requested; ignoring repeat at t={:.3}s",
                event.snapshot().elapsed()
            );
        }

        action
    }

    /// Returns the stop handle the engine should poll.
    #[must_use]
    pub fn stop_handle(&self) -> &StopHandle {
        &self.stop
    }

    /// Returns the wrapped observer.
    #[must_use]
    pub fn observer(&self) -> &Obs {
        &self.observer
    }

    /// Consumes the callback and returns the wrapped observer.
    pub fn into_observer(self) -> Obs {
        self.observer
    }
}
