//! Optimization task.
//!
//! An [`OptimizationTask`] couples the search box with the objective and
//! a consumable evaluation budget. Strategies evaluate candidates only
//! through the task, which keeps the budget count and the running best in
//! one place.

mod repair;
mod types;

pub use repair::RepairStrategy;
pub use types::OptimizationTask;
