use stallguard_core::ProgressSnapshot;

/// The scalars a search engine exposes while a progress event is in flight.
///
/// Implement this on the engine's native callback context. Each method maps
/// one native query (runtime, solution count, incumbent objective, bound).
pub trait ProgressQuery {
    /// Elapsed run time in seconds, non-decreasing within one search.
    fn runtime(&self) -> f64;

    /// Number of feasible solutions found so far.
    fn solution_count(&self) -> u64;

    /// Best incumbent objective.
    ///
    /// Only meaningful when [`solution_count`](Self::solution_count) is nonzero.
    fn best_objective(&self) -> f64;

    /// Best proven bound on the optimum.
    fn best_bound(&self) -> f64;
}

/// Reads a [`ProgressSnapshot`] from a native progress query.
///
/// The incumbent is present only when the engine reports at least one
/// solution, a finite objective, a finite runtime, and a bound that is not
/// NaN. Anything else paired with a nonzero count is malformed engine output;
/// it is reported as "no incumbent yet" so observers never see a gap or a
/// timestamp computed from garbage. An infinite bound is kept, since engines
/// report one before the root relaxation is solved.
pub fn snapshot_of<Q: ProgressQuery + ?Sized>(query: &Q) -> ProgressSnapshot {
    let runtime = query.runtime();
    let bound = query.best_bound();

    let incumbent = match query.solution_count() {
        0 => None,
        count => {
            let objective = query.best_objective();
            if objective.is_finite() && runtime.is_finite() && !bound.is_nan() {
                Some(objective)
            } else {
                log::warn!(
                    "engine reported {count} solutions with objective={objective}, \
                     bound={bound}, runtime={runtime}; treating as no incumbent"
                );
                None
            }
        }
    };

    ProgressSnapshot::new(runtime, incumbent, bound)
}
