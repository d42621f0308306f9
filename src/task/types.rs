//! The optimization task: search box, objective, and evaluation budget.

use super::repair::RepairStrategy;
use crate::error::OptimizeError;
use crate::objective::{Benchmark, Objective};
use crate::random::RandomSource;
use std::fmt;

/// One optimization run's problem definition and bookkeeping.
///
/// Owns the box bounds, the objective and the evaluation budget, counts
/// every evaluation and remembers the best point seen so far. A task is
/// built for a single run and mutated only through [`evaluate`](Self::evaluate).
///
/// # Examples
///
/// ```
/// use u_metaopt::task::OptimizationTask;
///
/// let mut task = OptimizationTask::new(
///     vec![-1.0, -1.0],
///     vec![1.0, 1.0],
///     |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>(),
///     10,
/// )
/// .unwrap();
///
/// let f = task.evaluate(&[0.5, 0.5]).unwrap();
/// assert_eq!(f, 0.5);
/// assert_eq!(task.evaluations(), 1);
/// assert_eq!(task.best_fitness(), 0.5);
/// ```
pub struct OptimizationTask {
    lower: Vec<f64>,
    upper: Vec<f64>,
    range: Vec<f64>,
    objective: Box<dyn Objective>,
    budget: usize,
    evaluations: usize,
    best: Option<Vec<f64>>,
    best_fitness: f64,
    repair: RepairStrategy,
    convergence: Vec<(usize, f64)>,
}

impl OptimizationTask {
    /// Creates a task over the box `[lower, upper]`.
    ///
    /// Fails when the bounds are empty, of different lengths, non-finite,
    /// or inverted in some dimension.
    pub fn new(
        lower: Vec<f64>,
        upper: Vec<f64>,
        objective: impl Objective + 'static,
        budget: usize,
    ) -> Result<Self, OptimizeError> {
        if lower.is_empty() {
            return Err(OptimizeError::InvalidBounds(
                "dimension must be positive".into(),
            ));
        }
        if lower.len() != upper.len() {
            return Err(OptimizeError::InvalidBounds(format!(
                "lower has {} entries, upper has {}",
                lower.len(),
                upper.len()
            )));
        }
        for (i, (lo, hi)) in lower.iter().zip(&upper).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(OptimizeError::InvalidBounds(format!(
                    "bound[{i}] is not finite"
                )));
            }
            if hi < lo {
                return Err(OptimizeError::InvalidBounds(format!(
                    "bound[{i}] has upper {hi} < lower {lo}"
                )));
            }
        }
        let range = lower.iter().zip(&upper).map(|(lo, hi)| hi - lo).collect();
        Ok(Self {
            lower,
            upper,
            range,
            objective: Box::new(objective),
            budget,
            evaluations: 0,
            best: None,
            best_fitness: f64::INFINITY,
            repair: RepairStrategy::default(),
            convergence: Vec::new(),
        })
    }

    /// Creates a task with the same `[lower, upper]` in every dimension.
    pub fn uniform_bounds(
        dimension: usize,
        lower: f64,
        upper: f64,
        objective: impl Objective + 'static,
        budget: usize,
    ) -> Result<Self, OptimizeError> {
        Self::new(
            vec![lower; dimension],
            vec![upper; dimension],
            objective,
            budget,
        )
    }

    /// Creates a task for a named built-in benchmark on its customary bounds.
    pub fn from_benchmark(
        name: &str,
        dimension: usize,
        budget: usize,
    ) -> Result<Self, OptimizeError> {
        let benchmark = Benchmark::from_name(name)?;
        let (lo, hi) = benchmark.bounds();
        Self::uniform_bounds(dimension, lo, hi, benchmark, budget)
    }

    /// Replaces the repair policy.
    pub fn with_repair(mut self, repair: RepairStrategy) -> Self {
        self.repair = repair;
        self
    }

    /// Evaluates a candidate, charging one unit of budget.
    ///
    /// Updates the running best when the fitness improves on it.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::BudgetExceeded`] once the budget is spent, and
    /// [`OptimizeError::DimensionMismatch`] for a candidate of the wrong length.
    pub fn evaluate(&mut self, candidate: &[f64]) -> Result<f64, OptimizeError> {
        if !self.has_budget() {
            return Err(OptimizeError::BudgetExceeded {
                budget: self.budget,
            });
        }
        self.check_dimension(candidate)?;

        self.evaluations += 1;
        let fitness = self.objective.evaluate(candidate);
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best = Some(candidate.to_vec());
            self.convergence.push((self.evaluations, fitness));
        }
        Ok(fitness)
    }

    /// `true` while at least one evaluation remains.
    pub fn has_budget(&self) -> bool {
        self.evaluations < self.budget
    }

    /// Evaluations left in the budget.
    pub fn remaining(&self) -> usize {
        self.budget - self.evaluations
    }

    /// Returns the repaired copy of `candidate`.
    pub fn repair(
        &self,
        candidate: &[f64],
        rng: &mut RandomSource,
    ) -> Result<Vec<f64>, OptimizeError> {
        let mut x = candidate.to_vec();
        self.repair_in_place(&mut x, rng)?;
        Ok(x)
    }

    /// Repairs `candidate` in place.
    pub fn repair_in_place(
        &self,
        candidate: &mut [f64],
        rng: &mut RandomSource,
    ) -> Result<(), OptimizeError> {
        self.check_dimension(candidate)?;
        self.repair.repair_in_place(candidate, &self.lower, &self.upper, rng);
        Ok(())
    }

    /// A point drawn uniformly inside the bounds.
    pub fn random_point(&self, rng: &mut RandomSource) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.range)
            .map(|(lo, r)| lo + r * rng.rand())
            .collect()
    }

    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Cached `upper - lower`.
    pub fn bc_range(&self) -> &[f64] {
        &self.range
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn repair_strategy(&self) -> RepairStrategy {
        self.repair
    }

    pub fn objective_name(&self) -> &str {
        self.objective.name()
    }

    /// Best point evaluated so far, if any.
    pub fn best_solution(&self) -> Option<&[f64]> {
        self.best.as_deref()
    }

    /// Best fitness evaluated so far (`+inf` before the first evaluation).
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// `(evaluation index, fitness)` at every improvement of the best.
    pub fn convergence(&self) -> &[(usize, f64)] {
        &self.convergence
    }

    fn check_dimension(&self, candidate: &[f64]) -> Result<(), OptimizeError> {
        if candidate.len() != self.dimension() {
            return Err(OptimizeError::DimensionMismatch {
                expected: self.dimension(),
                actual: candidate.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for OptimizationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizationTask")
            .field("objective", &self.objective.name())
            .field("dimension", &self.dimension())
            .field("budget", &self.budget)
            .field("evaluations", &self.evaluations)
            .field("best_fitness", &self.best_fitness)
            .field("repair", &self.repair)
            .finish()
    }
}
