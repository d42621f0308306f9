//! Budget-driven metaheuristic optimization over continuous boxes.
//!
//! Provides a generic run engine and two exemplar strategies:
//!
//! - **Bat Algorithm (BA)**: Population-based swarm search driven by
//!   frequency, velocity, pulse rate and loudness.
//! - **Simulated Annealing (SA)**: Single-point trajectory search with
//!   pluggable cooling schedules and temperature-gated acceptance.
//!
//! # Architecture
//!
//! - [`task::OptimizationTask`] owns the search box, the objective and the
//!   evaluation budget, and tracks the best point ever evaluated.
//! - [`algorithm::Strategy`] is what an algorithm implements: a validated
//!   parameter set, an initial state and one iteration step.
//! - [`algorithm::Algorithm`] drives any strategy through the same
//!   lifecycle until the budget is spent, drawing all randomness from one
//!   seeded [`random::RandomSource`].
//!
//! # Example
//!
//! ```
//! use u_metaopt::algorithm::Algorithm;
//! use u_metaopt::sa::{AnnealingConfig, ThermalAnnealingStrategy};
//! use u_metaopt::task::OptimizationTask;
//!
//! let mut task = OptimizationTask::from_benchmark("sphere", 2, 1_000).unwrap();
//! let strategy = ThermalAnnealingStrategy::new(AnnealingConfig::default().with_step(0.2));
//! let result = Algorithm::with_seed(strategy, 42).run(&mut task).unwrap();
//!
//! assert_eq!(result.evaluations, 1_000);
//! assert!(result.best_fitness.is_finite());
//! ```

pub mod algorithm;
pub mod ba;
pub mod diagnostics;
pub mod error;
pub mod objective;
pub mod params;
pub mod random;
pub mod sa;
pub mod task;

pub use error::OptimizeError;
