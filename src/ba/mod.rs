//! Bat Algorithm (BA).
//!
//! A population metaheuristic modeled on bat echolocation. Every bat
//! carries a position, a velocity and a pulse frequency; frequencies pull
//! velocities toward the best known point, while pulse rate and loudness
//! balance local walks against acceptance.
//!
//! # References
//!
//! - Yang, X.-S. (2010), "A New Metaheuristic Bat-Inspired Algorithm",
//!   Nature Inspired Cooperative Strategies for Optimization (NICSO 2010), 65-74.

mod config;
mod runner;
mod types;

pub use config::SwarmConfig;
pub use runner::SwarmFrequencyStrategy;
pub use types::SwarmState;
