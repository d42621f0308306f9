//! Bat algorithm iteration.

use super::config::SwarmConfig;
use super::types::SwarmState;
use crate::algorithm::Strategy;
use crate::error::OptimizeError;
use crate::random::RandomSource;
use crate::task::OptimizationTask;

/// Scale of the normal local walk around the global best.
const LOCAL_WALK_SCALE: f64 = 0.001;

/// Frequency-tuned swarm search (bat algorithm).
///
/// Each bat flies with a velocity pulled toward the global best by a
/// randomly drawn frequency. With probability `1 - r` the flight is
/// replaced by a short normal walk around the best; a move is kept only
/// if it does not worsen the bat's fitness and a loudness-gated coin
/// flip succeeds.
#[derive(Debug, Clone, Default)]
pub struct SwarmFrequencyStrategy {
    config: SwarmConfig,
}

impl SwarmFrequencyStrategy {
    pub fn new(config: SwarmConfig) -> Self {
        Self { config }
    }
}

impl Strategy for SwarmFrequencyStrategy {
    type Params = SwarmConfig;
    type State = SwarmState;
    const NAMES: &'static [&'static str] = &["BatAlgorithm", "BA"];

    fn params(&self) -> &SwarmConfig {
        &self.config
    }

    fn params_mut(&mut self) -> &mut SwarmConfig {
        &mut self.config
    }

    fn evaluations_per_iteration(&self) -> usize {
        self.config.population_size
    }

    fn init_population(
        &self,
        task: &mut OptimizationTask,
        rng: &mut RandomSource,
    ) -> Result<SwarmState, OptimizeError> {
        let np = self.config.population_size;
        let solutions: Vec<Vec<f64>> = (0..np).map(|_| task.random_point(rng)).collect();

        // bats beyond the budget keep infinite fitness
        let mut fitness = vec![f64::INFINITY; np];
        for (f, x) in fitness.iter_mut().zip(&solutions) {
            if !task.has_budget() {
                break;
            }
            *f = task.evaluate(x)?;
        }

        Ok(SwarmState::new(solutions, fitness))
    }

    fn run_iteration(
        &self,
        task: &mut OptimizationTask,
        state: &mut SwarmState,
        rng: &mut RandomSource,
    ) -> Result<(), OptimizeError> {
        let Some(best) = task.best_solution().map(<[f64]>::to_vec) else {
            return Ok(());
        };
        let cfg = &self.config;

        for i in 0..state.len() {
            let q = cfg.min_frequency + (cfg.max_frequency - cfg.min_frequency) * rng.rand();
            state.frequencies[i] = q;

            for ((v, x), b) in state.velocities[i]
                .iter_mut()
                .zip(&state.solutions[i])
                .zip(&best)
            {
                *v += (x - b) * q;
            }

            let mut pulse: Vec<f64> = state.solutions[i]
                .iter()
                .zip(&state.velocities[i])
                .map(|(x, v)| x + v)
                .collect();
            task.repair_in_place(&mut pulse, rng)?;

            if rng.rand() > cfg.pulse_rate {
                pulse = best
                    .iter()
                    .map(|b| b + LOCAL_WALK_SCALE * rng.normal(0.0, 1.0))
                    .collect();
                task.repair_in_place(&mut pulse, rng)?;
            }

            let f_new = task.evaluate(&pulse)?;
            if f_new <= state.fitness[i] && rng.rand() < cfg.loudness {
                state.solutions[i].clone_from(&pulse);
                state.fitness[i] = f_new;
            }
            state.pulses[i] = pulse;
        }

        Ok(())
    }
}
