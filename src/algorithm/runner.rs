//! The run driver shared by every strategy.

use super::types::{Phase, Strategy};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::OptimizeError;
use crate::params::{ParameterSet, Parameters};
use crate::random::RandomSource;
use crate::task::OptimizationTask;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    /// Best point evaluated during the run. Empty when the budget was zero.
    pub best_solution: Vec<f64>,

    /// Fitness of `best_solution` (`+inf` when nothing was evaluated).
    pub best_fitness: f64,

    /// Objective evaluations consumed.
    pub evaluations: usize,

    /// Iterations executed after initialization.
    pub iterations: usize,

    /// Seed of the random source at construction.
    pub seed: u64,

    /// `(evaluation index, fitness)` at each improvement of the best.
    pub convergence: Vec<(usize, f64)>,

    /// Configuration notices gathered so far by this algorithm instance.
    pub diagnostics: Vec<Diagnostic>,
}

/// A strategy bound to its random source and lifecycle.
///
/// # Usage
///
/// ```
/// use u_metaopt::algorithm::Algorithm;
/// use u_metaopt::ba::{SwarmConfig, SwarmFrequencyStrategy};
/// use u_metaopt::task::OptimizationTask;
///
/// let mut task = OptimizationTask::from_benchmark("sphere", 5, 2_000).unwrap();
/// let strategy = SwarmFrequencyStrategy::new(SwarmConfig::default().with_population_size(20));
/// let mut algo = Algorithm::with_seed(strategy, 42);
///
/// let result = algo.run(&mut task).unwrap();
/// assert!(result.evaluations <= 2_000);
/// assert_eq!(result.best_solution.len(), 5);
/// ```
#[derive(Debug)]
pub struct Algorithm<S: Strategy> {
    strategy: S,
    rng: RandomSource,
    phase: Phase,
    diagnostics: Diagnostics,
    state: Option<S::State>,
}

impl<S: Strategy> Algorithm<S> {
    /// Binds `strategy` to an entropy-seeded random source.
    pub fn new(strategy: S) -> Self {
        Self::with_rng(strategy, RandomSource::from_entropy())
    }

    /// Binds `strategy` to a random source with a fixed seed.
    pub fn with_seed(strategy: S, seed: u64) -> Self {
        Self::with_rng(strategy, RandomSource::from_seed(seed))
    }

    pub fn with_rng(strategy: S, rng: RandomSource) -> Self {
        Self {
            strategy,
            rng,
            phase: Phase::Created,
            diagnostics: Diagnostics::new(),
            state: None,
        }
    }

    /// Applies named options to the strategy's parameters.
    ///
    /// Invalid values fall back to their defaults and unknown names are
    /// ignored; both are recorded in [`diagnostics`](Self::diagnostics).
    pub fn set_parameters(&mut self, options: &ParameterSet) -> &mut Self {
        self.strategy.params_mut().apply(options, &mut self.diagnostics);
        self.phase = Phase::ParametersSet;
        self
    }

    /// Runs the strategy until the task's budget cannot cover another
    /// iteration, then returns the best solution the task has seen.
    ///
    /// # Errors
    ///
    /// Propagates [`OptimizeError::BudgetExceeded`] and
    /// [`OptimizeError::DimensionMismatch`] raised by the task; both mean the
    /// strategy broke its evaluation contract.
    pub fn run(&mut self, task: &mut OptimizationTask) -> Result<RunResult, OptimizeError> {
        self.strategy.params_mut().sanitize(&mut self.diagnostics);
        self.phase = Phase::ParametersSet;

        log::debug!(
            "{}: starting run (dimension {}, budget {}, seed {})",
            self.strategy.name(),
            task.dimension(),
            task.budget(),
            self.rng.seed()
        );

        let cost = self.strategy.evaluations_per_iteration().max(1);
        let mut state = self.strategy.init_population(task, &mut self.rng)?;
        self.phase = Phase::Initialized;

        let mut iterations = 0usize;
        while task.has_budget() && task.remaining() >= cost {
            self.phase = Phase::Iterating;
            self.strategy.run_iteration(task, &mut state, &mut self.rng)?;
            iterations += 1;
        }

        self.phase = Phase::Terminated;
        self.state = Some(state);

        log::debug!(
            "{}: finished after {} iterations, {} evaluations, best fitness {}",
            self.strategy.name(),
            iterations,
            task.evaluations(),
            task.best_fitness()
        );

        Ok(RunResult {
            best_solution: task.best_solution().map(<[f64]>::to_vec).unwrap_or_default(),
            best_fitness: task.best_fitness(),
            evaluations: task.evaluations(),
            iterations,
            seed: self.rng.seed(),
            convergence: task.convergence().to_vec(),
            diagnostics: self.diagnostics.entries().to_vec(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Strategy state left by the last completed run.
    pub fn state(&self) -> Option<&S::State> {
        self.state.as_ref()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn params(&self) -> &S::Params {
        self.strategy.params()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{is_positive_int, ParamSpec, ParamValue};

    // ---- Pure random search, k samples per iteration ----

    #[derive(Debug, Clone)]
    struct BatchConfig {
        batch: usize,
    }

    impl Default for BatchConfig {
        fn default() -> Self {
            Self { batch: 3 }
        }
    }

    const BATCH_SPECS: &[ParamSpec] = &[ParamSpec {
        name: "batch",
        is_valid: is_positive_int,
        default: || ParamValue::Int(3),
    }];

    impl Parameters for BatchConfig {
        fn specs() -> &'static [ParamSpec] {
            BATCH_SPECS
        }

        fn get(&self, name: &str) -> Option<ParamValue> {
            (name == "batch").then(|| self.batch.into())
        }

        fn set(&mut self, name: &str, value: &ParamValue) -> bool {
            match (name, value.as_int().and_then(|n| usize::try_from(n).ok())) {
                ("batch", Some(n)) => {
                    self.batch = n;
                    true
                }
                _ => false,
            }
        }
    }

    #[derive(Debug)]
    struct RandomSearch {
        params: BatchConfig,
    }

    impl Strategy for RandomSearch {
        type Params = BatchConfig;
        type State = Vec<f64>;
        const NAMES: &'static [&'static str] = &["RandomSearch", "RS"];

        fn params(&self) -> &BatchConfig {
            &self.params
        }

        fn params_mut(&mut self) -> &mut BatchConfig {
            &mut self.params
        }

        fn evaluations_per_iteration(&self) -> usize {
            self.params.batch
        }

        fn init_population(
            &self,
            task: &mut OptimizationTask,
            rng: &mut RandomSource,
        ) -> Result<Vec<f64>, OptimizeError> {
            let x = task.random_point(rng);
            let f = task.evaluate(&x)?;
            Ok(vec![f])
        }

        fn run_iteration(
            &self,
            task: &mut OptimizationTask,
            state: &mut Vec<f64>,
            rng: &mut RandomSource,
        ) -> Result<(), OptimizeError> {
            for _ in 0..self.params.batch {
                let x = task.random_point(rng);
                state.push(task.evaluate(&x)?);
            }
            Ok(())
        }
    }

    fn sphere_task(budget: usize) -> OptimizationTask {
        OptimizationTask::uniform_bounds(
            3,
            -5.0,
            5.0,
            |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>(),
            budget,
        )
        .unwrap()
    }

    #[test]
    fn test_budget_never_exceeded_remainder_smaller_than_batch() {
        let mut task = sphere_task(21);
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig { batch: 4 } }, 1);
        let result = algo.run(&mut task).unwrap();

        // 1 initial + 5 * 4
        assert_eq!(result.evaluations, 21);
        assert_eq!(result.iterations, 5);

        let mut task = sphere_task(24);
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig { batch: 4 } }, 1);
        let result = algo.run(&mut task).unwrap();
        assert!(result.evaluations <= 24);
        assert!(24 - result.evaluations < 4);
    }

    #[test]
    fn test_phase_transitions() {
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig::default() }, 1);
        assert_eq!(algo.phase(), Phase::Created);
        algo.set_parameters(&ParameterSet::new().with("batch", 2));
        assert_eq!(algo.phase(), Phase::ParametersSet);
        assert!(algo.state().is_none());

        let mut task = sphere_task(11);
        algo.run(&mut task).unwrap();
        assert_eq!(algo.phase(), Phase::Terminated);
        // initial + 5 iterations of 2
        assert_eq!(algo.state().map(Vec::len), Some(11));
    }

    #[test]
    fn test_best_matches_minimum_of_all_evaluations() {
        let mut task = sphere_task(40);
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig::default() }, 9);
        let result = algo.run(&mut task).unwrap();
        let min = algo
            .state()
            .unwrap()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_fitness, min);
    }

    #[test]
    fn test_convergence_strictly_decreasing() {
        let mut task = sphere_task(300);
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig::default() }, 5);
        let result = algo.run(&mut task).unwrap();
        assert!(!result.convergence.is_empty());
        for w in result.convergence.windows(2) {
            assert!(w[1].0 > w[0].0);
            assert!(w[1].1 < w[0].1);
        }
        assert_eq!(result.convergence.last().map(|c| c.1), Some(result.best_fitness));
    }

    #[test]
    fn test_invalid_and_unknown_options_are_diagnosed() {
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig::default() }, 1);
        algo.set_parameters(&ParameterSet::new().with("batch", -2).with("F", 0.5));
        assert_eq!(algo.params().batch, 3);
        assert_eq!(algo.diagnostics().len(), 2);

        let mut task = sphere_task(10);
        let result = algo.run(&mut task).unwrap();
        assert_eq!(result.diagnostics.len(), 2);
    }

    #[test]
    fn test_invalid_typed_config_sanitized_at_run() {
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig { batch: 0 } }, 1);
        let mut task = sphere_task(10);
        let result = algo.run(&mut task).unwrap();
        assert_eq!(algo.params().batch, 3);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.evaluations, 10);
    }

    #[test]
    fn test_zero_budget() {
        let mut task = sphere_task(0);
        let mut algo = Algorithm::with_seed(RandomSearch { params: BatchConfig::default() }, 1);
        assert_eq!(
            algo.run(&mut task),
            Err(OptimizeError::BudgetExceeded { budget: 0 })
        );
    }

    #[test]
    fn test_names() {
        let s = RandomSearch { params: BatchConfig::default() };
        assert_eq!(s.name(), "RandomSearch");
        assert!(RandomSearch::answers_to("rs"));
        assert!(!RandomSearch::answers_to("SA"));
    }
}
