//! The strategy contract plugged into the shared run driver.

use crate::error::OptimizeError;
use crate::params::Parameters;
use crate::random::RandomSource;
use crate::task::OptimizationTask;

/// Lifecycle of an [`Algorithm`](super::Algorithm) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed with the strategy's parameters, nothing applied yet.
    Created,
    /// Parameters applied and validated.
    ParametersSet,
    /// Initial population evaluated.
    Initialized,
    /// Inside the iteration loop.
    Iterating,
    /// Budget exhausted, result extracted.
    Terminated,
}

/// A search strategy: parameter schema, initial state, and one generation.
///
/// Strategies never look at the budget themselves. The driver calls
/// [`run_iteration`](Strategy::run_iteration) only while the task can
/// afford [`evaluations_per_iteration`](Strategy::evaluations_per_iteration)
/// more evaluations, and reads the result from the task's running best.
///
/// # Implementing
///
/// ```ignore
/// struct RandomSearch { params: RandomSearchConfig }
///
/// impl Strategy for RandomSearch {
///     type Params = RandomSearchConfig;
///     type State = ();
///     const NAMES: &'static [&'static str] = &["RandomSearch", "RS"];
///
///     fn params(&self) -> &RandomSearchConfig { &self.params }
///     fn params_mut(&mut self) -> &mut RandomSearchConfig { &mut self.params }
///     fn evaluations_per_iteration(&self) -> usize { 1 }
///
///     fn init_population(&self, task: &mut OptimizationTask, rng: &mut RandomSource)
///         -> Result<(), OptimizeError>
///     {
///         let x = task.random_point(rng);
///         task.evaluate(&x).map(|_| ())
///     }
///
///     fn run_iteration(&self, task: &mut OptimizationTask, _: &mut (), rng: &mut RandomSource)
///         -> Result<(), OptimizeError>
///     {
///         let x = task.random_point(rng);
///         task.evaluate(&x).map(|_| ())
///     }
/// }
/// ```
pub trait Strategy {
    /// Typed, validated parameter set.
    type Params: Parameters;

    /// Population or trajectory state carried between iterations.
    type State;

    /// Canonical name first, then short aliases.
    const NAMES: &'static [&'static str];

    fn params(&self) -> &Self::Params;

    fn params_mut(&mut self) -> &mut Self::Params;

    /// Evaluations consumed by one call to `run_iteration`.
    fn evaluations_per_iteration(&self) -> usize;

    /// Builds and evaluates the initial state.
    ///
    /// Must evaluate each initial individual at most once and never beyond
    /// the task's remaining budget.
    fn init_population(
        &self,
        task: &mut OptimizationTask,
        rng: &mut RandomSource,
    ) -> Result<Self::State, OptimizeError>;

    /// Performs exactly one generation.
    fn run_iteration(
        &self,
        task: &mut OptimizationTask,
        state: &mut Self::State,
        rng: &mut RandomSource,
    ) -> Result<(), OptimizeError>;

    fn name(&self) -> &'static str {
        Self::NAMES.first().copied().unwrap_or("unnamed")
    }

    /// Whether `name` is the canonical name or one of the aliases.
    fn answers_to(name: &str) -> bool {
        Self::NAMES.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}
