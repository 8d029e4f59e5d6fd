use crate::ProgressQuery;

/// One recorded progress event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Elapsed run time in seconds.
    pub runtime: f64,

    /// Feasible solutions found so far.
    pub solution_count: u64,

    /// Best incumbent objective (ignored while `solution_count` is zero).
    pub best_objective: f64,

    /// Best proven bound.
    pub best_bound: f64,
}

impl Progress {
    /// Creates a record from the four scalars an engine reports per event.
    #[must_use]
    pub fn new(runtime: f64, solution_count: u64, best_objective: f64, best_bound: f64) -> Self {
        Self {
            runtime,
            solution_count,
            best_objective,
            best_bound,
        }
    }
}

impl ProgressQuery for Progress {
    fn runtime(&self) -> f64 {
        self.runtime
    }

    fn solution_count(&self) -> u64 {
        self.solution_count
    }

    fn best_objective(&self) -> f64 {
        self.best_objective
    }

    fn best_bound(&self) -> f64 {
        self.best_bound
    }
}
