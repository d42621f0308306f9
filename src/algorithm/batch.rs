//! Independent repetitions of a run.
//!
//! Each repetition builds its own task, strategy and random source, so
//! repetitions share no mutable state. With the `parallel` feature they
//! are spread over the rayon thread pool.

use super::runner::{Algorithm, RunResult};
use super::types::Strategy;
use crate::error::OptimizeError;
use crate::task::OptimizationTask;

/// Runs one independent repetition per seed, results in seed order.
///
/// # Examples
///
/// ```
/// use u_metaopt::algorithm::run_independent;
/// use u_metaopt::sa::{AnnealingConfig, ThermalAnnealingStrategy};
/// use u_metaopt::task::OptimizationTask;
///
/// let results = run_independent(
///     &[1, 2, 3],
///     || OptimizationTask::from_benchmark("sphere", 2, 300),
///     || ThermalAnnealingStrategy::new(AnnealingConfig::default()),
/// );
/// assert_eq!(results.len(), 3);
/// assert!(results.iter().all(|r| r.as_ref().is_ok_and(|r| r.evaluations == 300)));
/// ```
pub fn run_independent<S, T, M>(
    seeds: &[u64],
    make_task: T,
    make_strategy: M,
) -> Vec<Result<RunResult, OptimizeError>>
where
    S: Strategy,
    T: Fn() -> Result<OptimizationTask, OptimizeError> + Sync,
    M: Fn() -> S + Sync,
{
    let run_one = |&seed: &u64| -> Result<RunResult, OptimizeError> {
        let mut task = make_task()?;
        let mut algo = Algorithm::with_seed(make_strategy(), seed);
        algo.run(&mut task)
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seeds.par_iter().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(run_one).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ba::{SwarmConfig, SwarmFrequencyStrategy};

    #[test]
    fn test_repetitions_match_single_runs() {
        let make_task = || OptimizationTask::from_benchmark("rastrigin", 3, 500);
        let make_strategy =
            || SwarmFrequencyStrategy::new(SwarmConfig::default().with_population_size(10));

        let batch = run_independent(&[7, 8], make_task, make_strategy);

        for (seed, result) in [7u64, 8].iter().zip(&batch) {
            let mut task = make_task().unwrap();
            let mut algo = Algorithm::with_seed(make_strategy(), *seed);
            let single = algo.run(&mut task).unwrap();
            assert_eq!(result.as_ref().unwrap(), &single);
        }
    }

    #[test]
    fn test_task_construction_error_propagates() {
        let results = run_independent(
            &[1],
            || OptimizationTask::from_benchmark("unknown", 3, 10),
            || SwarmFrequencyStrategy::new(SwarmConfig::default()),
        );
        assert_eq!(
            results[0],
            Err(OptimizeError::UnknownObjective("unknown".into()))
        );
    }
}
