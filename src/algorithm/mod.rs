//! Algorithm lifecycle.
//!
//! A [`Strategy`] supplies the parameter schema, the initial state and one
//! iteration step. [`Algorithm`] wraps it with a [`RandomSource`] and runs
//! the shared lifecycle:
//!
//! ```text
//! Created -> ParametersSet -> Initialized -> Iterating -> Terminated
//! ```
//!
//! Termination is driven only by the task's evaluation budget; best-point
//! tracking and evaluation counting live in the task.
//!
//! [`RandomSource`]: crate::random::RandomSource

mod batch;
mod runner;
mod types;

pub use batch::run_independent;
pub use runner::{Algorithm, RunResult};
pub use types::{Phase, Strategy};
