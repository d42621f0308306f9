//! Error types shared by tasks, parameters and the run driver.

use thiserror::Error;

/// Errors raised by the optimization framework.
///
/// Only [`BudgetExceeded`](OptimizeError::BudgetExceeded) can escape a
/// correctly configured run, and it indicates a strategy that evaluates
/// more candidates than it declared. Parameter problems are absorbed by
/// the lenient configuration path and reported as diagnostics instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// A parameter failed its validity predicate (strict validation only).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// `evaluate` was called after the evaluation budget ran out.
    #[error("evaluation budget of {budget} exhausted")]
    BudgetExceeded { budget: usize },

    /// A candidate's length does not match the task dimension.
    #[error("candidate has dimension {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Task bounds are empty, mismatched, non-finite or inverted.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// No built-in objective is registered under this name.
    #[error("unknown objective `{0}`")]
    UnknownObjective(String),

    /// No built-in cooling schedule is registered under this name.
    #[error("unknown cooling schedule `{0}`")]
    UnknownCooling(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = OptimizeError::BudgetExceeded { budget: 50 };
        assert_eq!(err.to_string(), "evaluation budget of 50 exhausted");

        let err = OptimizeError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "candidate has dimension 3, expected 2");
    }
}
