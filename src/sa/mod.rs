//! Simulated Annealing (SA).
//!
//! A single-point trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted while the temperature
//! is positive; once the schedule cools it to zero or below, only
//! improvements move the current point.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::{
    cooling_by_name, AnnealingConfig, CoolDelta, CoolGeometric, CoolLinear, CoolingSchedule,
};
pub use runner::{acceptance_probability, ThermalAnnealingStrategy};
pub use types::AnnealingState;
