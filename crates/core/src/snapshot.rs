/// The progress scalars read from a running search at one event.
///
/// A snapshot is ephemeral: the engine adapter builds a fresh one for every
/// progress event and observers read it during that single call.
///
/// The best objective only exists once an incumbent has been found, so it is
/// stored as an `Option`. A snapshot without an incumbent therefore cannot
/// carry a stray objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    elapsed: f64,
    incumbent: Option<f64>,
    best_bound: f64,
}

impl ProgressSnapshot {
    /// Creates a snapshot.
    ///
    /// `elapsed` is the search runtime in seconds, `incumbent` is the best
    /// feasible objective found so far (if any), and `best_bound` is the best
    /// proven bound on the optimum.
    #[must_use]
    pub fn new(elapsed: f64, incumbent: Option<f64>, best_bound: f64) -> Self {
        Self {
            elapsed,
            incumbent,
            best_bound,
        }
    }

    /// Returns the elapsed search time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Returns `true` once at least one feasible solution has been found.
    #[must_use]
    pub fn has_incumbent(&self) -> bool {
        self.incumbent.is_some()
    }

    /// Returns the best feasible objective, or `None` before the first incumbent.
    #[must_use]
    pub fn best_objective(&self) -> Option<f64> {
        self.incumbent
    }

    /// Returns the best proven bound.
    #[must_use]
    pub fn best_bound(&self) -> f64 {
        self.best_bound
    }

    /// Returns the absolute gap `|best_objective - best_bound|`.
    ///
    /// The gap is undefined until an incumbent exists.
    #[must_use]
    pub fn gap(&self) -> Option<f64> {
        self.incumbent.map(|objective| (objective - self.best_bound).abs())
    }
}
