use thiserror::Error;

/// Configuration for a [`StallTermination`](super::StallTermination) controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    stall_time_limit: f64,
    min_gap_improvement: f64,
}

/// Errors that can occur when validating a stall controller config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("stall_time_limit must be finite and positive")]
    StallTimeLimit,

    #[error("min_gap_improvement must be finite and positive")]
    MinGapImprovement,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50.0, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// `stall_time_limit` is in seconds. `min_gap_improvement` is in objective
    /// units and is the smallest gap decrease that counts as progress.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is zero, negative, or non-finite.
    pub fn new(stall_time_limit: f64, min_gap_improvement: f64) -> Result<Self, ConfigError> {
        if !stall_time_limit.is_finite() || stall_time_limit <= 0.0 {
            return Err(ConfigError::StallTimeLimit);
        }
        if !min_gap_improvement.is_finite() || min_gap_improvement <= 0.0 {
            return Err(ConfigError::MinGapImprovement);
        }

        Ok(Self {
            stall_time_limit,
            min_gap_improvement,
        })
    }

    /// Returns the seconds without sufficient improvement tolerated before
    /// termination.
    #[must_use]
    pub fn stall_time_limit(&self) -> f64 {
        self.stall_time_limit
    }

    /// Returns the minimum absolute gap decrease that counts as improvement.
    #[must_use]
    pub fn min_gap_improvement(&self) -> f64 {
        self.min_gap_improvement
    }
}
