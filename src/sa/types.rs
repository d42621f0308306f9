//! Annealing trajectory state.

/// Current point, its fitness and the running temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingState {
    /// Current point `x`.
    pub current: Vec<f64>,

    /// Fitness of `current`.
    pub fitness: f64,

    /// Current temperature.
    pub temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

impl AnnealingState {
    pub fn new(current: Vec<f64>, fitness: f64, temperature: f64) -> Self {
        Self {
            current,
            fitness,
            temperature,
            accepted_moves: 0,
            improving_moves: 0,
        }
    }
}
