use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A cooperative stop signal shared between a callback and its engine.
///
/// The callback side calls [`request`](Self::request); the engine polls
/// [`is_requested`](Self::is_requested) at safe points in its search.
/// Requesting more than once is harmless.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    /// Creates a handle with no stop requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the search stop.
    ///
    /// Returns `true` if this call was the first request and `false` if a stop
    /// had already been requested.
    pub fn request(&self) -> bool {
        !self.flag.swap(true, Ordering::Relaxed)
    }

    /// Returns `true` once a stop has been requested through any clone.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        assert!(!StopHandle::new().is_requested());
    }

    #[test]
    fn only_first_request_reports_true() {
        let handle = StopHandle::new();

        assert!(handle.request());
        assert!(!handle.request());
        assert!(!handle.request());
        assert!(handle.is_requested());
    }

    #[test]
    fn clones_share_the_signal() {
        let handle = StopHandle::new();
        let engine_side = handle.clone();

        handle.request();

        assert!(engine_side.is_requested());
    }

    #[test]
    fn request_is_visible_across_threads() {
        let handle = StopHandle::new();
        let remote = handle.clone();

        std::thread::spawn(move || remote.request())
            .join()
            .expect("thread should not panic");

        assert!(handle.is_requested());
    }
}
