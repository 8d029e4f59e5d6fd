use thiserror::Error;

/// Errors that can occur when validating a replay trace.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TraceError {
    #[error("runtime at entry {index} is not finite")]
    NonFiniteRuntime { index: usize },

    #[error("runtime at entry {index} is negative ({runtime})")]
    NegativeRuntime { index: usize, runtime: f64 },

    #[error("runtime at entry {index} ({runtime}) is earlier than the previous entry ({previous})")]
    DecreasingRuntime {
        index: usize,
        runtime: f64,
        previous: f64,
    },
}
