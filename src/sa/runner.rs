//! SA iteration step.

use super::config::AnnealingConfig;
use super::types::AnnealingState;
use crate::algorithm::Strategy;
use crate::error::OptimizeError;
use crate::random::RandomSource;
use crate::task::OptimizationTask;

/// Acceptance probability for a fitness change at `temperature`.
///
/// Improvements are always accepted. A worse move is accepted with
/// `exp(delta / T)` clamped to `[0, 1]`, which is 1 for any positive
/// temperature; at zero or negative temperature worse moves are never
/// accepted. The clamp also absorbs overflow when `T` is close to zero.
pub fn acceptance_probability(delta_fitness: f64, temperature: f64) -> f64 {
    if delta_fitness < 0.0 {
        return 1.0;
    }
    if temperature.is_nan() || temperature <= 0.0 {
        return 0.0;
    }
    let p = (delta_fitness / temperature).exp();
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Single-point thermal annealing over a continuous box.
///
/// Each step proposes a uniform perturbation of width `delta` around the
/// current point, accepts it by the temperature-gated rule of
/// [`acceptance_probability`] and then cools the temperature with the
/// configured schedule. Exactly one evaluation per step.
#[derive(Debug, Clone, Default)]
pub struct ThermalAnnealingStrategy {
    config: AnnealingConfig,
}

impl ThermalAnnealingStrategy {
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }
}

impl Strategy for ThermalAnnealingStrategy {
    type Params = AnnealingConfig;
    type State = AnnealingState;
    const NAMES: &'static [&'static str] = &["SimulatedAnnealing", "SA"];

    fn params(&self) -> &AnnealingConfig {
        &self.config
    }

    fn params_mut(&mut self) -> &mut AnnealingConfig {
        &mut self.config
    }

    fn evaluations_per_iteration(&self) -> usize {
        1
    }

    fn init_population(
        &self,
        task: &mut OptimizationTask,
        rng: &mut RandomSource,
    ) -> Result<AnnealingState, OptimizeError> {
        let x = task.random_point(rng);
        let fitness = if task.has_budget() {
            task.evaluate(&x)?
        } else {
            f64::INFINITY
        };
        Ok(AnnealingState::new(x, fitness, self.config.initial_temperature))
    }

    fn run_iteration(
        &self,
        task: &mut OptimizationTask,
        state: &mut AnnealingState,
        rng: &mut RandomSource,
    ) -> Result<(), OptimizeError> {
        let cfg = &self.config;

        let mut candidate: Vec<f64> = state
            .current
            .iter()
            .map(|x| x + cfg.step * (rng.rand() - 0.5))
            .collect();
        task.repair_in_place(&mut candidate, rng)?;

        let candidate_fitness = task.evaluate(&candidate)?;
        let delta = candidate_fitness - state.fitness;

        if rng.rand() < acceptance_probability(delta, state.temperature) {
            if delta < 0.0 {
                state.improving_moves += 1;
            }
            state.accepted_moves += 1;
            state.current = candidate;
            state.fitness = candidate_fitness;
        }

        state.temperature = cfg.cooling.cool(
            state.temperature,
            cfg.initial_temperature,
            cfg.delta_t,
            task.evaluations(),
        );

        Ok(())
    }
}
