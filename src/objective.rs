//! Objective functions.
//!
//! The framework treats the objective as a black box with one capability:
//! map a point to a scalar fitness (lower is better). Any
//! `Fn(&[f64]) -> f64 + Send + Sync` closure qualifies. A handful of
//! classic test functions are registered under their usual names and
//! resolved once, when a task is built.

use crate::error::OptimizeError;
use std::f64::consts::{E, PI};

/// A minimization objective over `D`-dimensional points.
pub trait Objective: Send + Sync {
    /// Fitness of `x`. Lower is better.
    fn evaluate(&self, x: &[f64]) -> f64;

    /// Human-readable name.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// Built-in benchmark functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Benchmark {
    /// `sum(x_i^2)`.
    Sphere,
    /// `10 D + sum(x_i^2 - 10 cos(2 pi x_i))`.
    Rastrigin,
    /// Ackley's function with `a = 20`, `b = 0.2`, `c = 2 pi`.
    Ackley,
    /// `1 + sum(x_i^2) / 4000 - prod(cos(x_i / sqrt(i)))`.
    Griewank,
    /// `sum(100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2)`.
    Rosenbrock,
}

impl Benchmark {
    pub const ALL: [Benchmark; 5] = [
        Benchmark::Sphere,
        Benchmark::Rastrigin,
        Benchmark::Ackley,
        Benchmark::Griewank,
        Benchmark::Rosenbrock,
    ];

    /// Resolves a benchmark by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, OptimizeError> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| OptimizeError::UnknownObjective(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Benchmark::Sphere => "sphere",
            Benchmark::Rastrigin => "rastrigin",
            Benchmark::Ackley => "ackley",
            Benchmark::Griewank => "griewank",
            Benchmark::Rosenbrock => "rosenbrock",
        }
    }

    /// Customary per-dimension search bounds `(lower, upper)`.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Benchmark::Sphere | Benchmark::Rastrigin => (-5.12, 5.12),
            Benchmark::Ackley => (-32.768, 32.768),
            Benchmark::Griewank => (-600.0, 600.0),
            Benchmark::Rosenbrock => (-30.0, 30.0),
        }
    }
}

impl Objective for Benchmark {
    fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            Benchmark::Sphere => x.iter().map(|v| v * v).sum(),
            Benchmark::Rastrigin => {
                10.0 * x.len() as f64
                    + x.iter()
                        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
                        .sum::<f64>()
            }
            Benchmark::Ackley => {
                if x.is_empty() {
                    return 0.0;
                }
                let n = x.len() as f64;
                let sq = x.iter().map(|v| v * v).sum::<f64>() / n;
                let cs = x.iter().map(|v| (2.0 * PI * v).cos()).sum::<f64>() / n;
                -20.0 * (-0.2 * sq.sqrt()).exp() - cs.exp() + 20.0 + E
            }
            Benchmark::Griewank => {
                let sum = x.iter().map(|v| v * v).sum::<f64>() / 4000.0;
                let prod: f64 = x
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
                    .product();
                1.0 + sum - prod
            }
            Benchmark::Rosenbrock => x
                .windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
                .sum(),
        }
    }

    fn name(&self) -> &str {
        Benchmark::name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_minima_are_zero() {
        for b in [
            Benchmark::Sphere,
            Benchmark::Rastrigin,
            Benchmark::Ackley,
            Benchmark::Griewank,
        ] {
            let f = b.evaluate(&[0.0, 0.0, 0.0]);
            assert!(f.abs() < 1e-12, "{} at origin = {f}", b.name());
        }
        assert!(Benchmark::Rosenbrock.evaluate(&[1.0, 1.0, 1.0]).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_value() {
        assert_eq!(Benchmark::Sphere.evaluate(&[1.0, -2.0]), 5.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Benchmark::from_name("Griewank"), Ok(Benchmark::Griewank));
        assert_eq!(
            Benchmark::from_name("levy"),
            Err(OptimizeError::UnknownObjective("levy".into()))
        );
    }

    #[test]
    fn test_closure_is_objective() {
        let f = |x: &[f64]| x.iter().sum::<f64>();
        assert_eq!(f.evaluate(&[1.0, 2.0]), 3.0);
        assert_eq!(Objective::name(&f), "custom");
    }
}
