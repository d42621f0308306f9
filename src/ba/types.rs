//! Swarm state carried between iterations.

/// Positions, fitness and flight dynamics of every bat.
///
/// All vectors are indexed by bat; inner vectors have the task dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmState {
    /// Current positions `Sol`.
    pub solutions: Vec<Vec<f64>>,
    /// Fitness of each current position.
    pub fitness: Vec<f64>,
    /// Frequency `Q` drawn for each bat in the last iteration.
    pub frequencies: Vec<f64>,
    /// Velocities `v`.
    pub velocities: Vec<Vec<f64>>,
    /// Last proposed (pulse) positions `S`.
    pub pulses: Vec<Vec<f64>>,
}

impl SwarmState {
    /// Zero frequencies, velocities and pulses around the given positions.
    pub fn new(solutions: Vec<Vec<f64>>, fitness: Vec<f64>) -> Self {
        let n = solutions.len();
        let dim = solutions.first().map_or(0, Vec::len);
        Self {
            solutions,
            fitness,
            frequencies: vec![0.0; n],
            velocities: vec![vec![0.0; dim]; n],
            pulses: vec![vec![0.0; dim]; n],
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}
