//! SA configuration and cooling schedules.

use crate::error::OptimizeError;
use crate::params::{is_open_unit_float, is_positive_number, ParamSpec, ParamValue, Parameters};
use std::fmt;
use std::sync::Arc;

/// Temperature update applied after every annealing step.
pub trait CoolingSchedule: Send + Sync + fmt::Debug {
    /// Returns the next temperature.
    ///
    /// # Arguments
    /// * `current` - Temperature before this step
    /// * `initial` - Starting temperature `T`
    /// * `delta` - Cooling decrement `deltaT`
    /// * `evaluations` - Objective evaluations used so far
    fn cool(&self, current: f64, initial: f64, delta: f64, evaluations: usize) -> f64;

    /// Registry name.
    fn name(&self) -> &'static str;
}

/// Linear by a fixed decrement: `T_{k+1} = T_k - deltaT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolDelta;

impl CoolingSchedule for CoolDelta {
    fn cool(&self, current: f64, _initial: f64, delta: f64, _evaluations: usize) -> f64 {
        current - delta
    }

    fn name(&self) -> &'static str {
        "delta"
    }
}

/// Linear by budget fraction: `T_{k+1} = T_k - T / evaluations`.
///
/// Leaves the temperature unchanged before the first evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolLinear;

impl CoolingSchedule for CoolLinear {
    fn cool(&self, current: f64, initial: f64, _delta: f64, evaluations: usize) -> f64 {
        if evaluations == 0 {
            return current;
        }
        current - initial / evaluations as f64
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
///
/// Typical `alpha`: 0.95-0.99. Never reaches zero, so worse moves stay
/// possible for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct CoolGeometric {
    /// Cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,
}

impl Default for CoolGeometric {
    fn default() -> Self {
        Self { alpha: 0.95 }
    }
}

impl CoolingSchedule for CoolGeometric {
    fn cool(&self, current: f64, _initial: f64, _delta: f64, _evaluations: usize) -> f64 {
        current * self.alpha
    }

    fn name(&self) -> &'static str {
        "geometric"
    }
}

/// Resolves a built-in cooling schedule by name (case-insensitive).
///
/// Accepts `delta`/`coolDelta`, `linear`/`coolLinear` and
/// `geometric`/`coolGeometric` (alpha 0.95).
pub fn cooling_by_name(name: &str) -> Result<Arc<dyn CoolingSchedule>, OptimizeError> {
    match name.to_ascii_lowercase().as_str() {
        "delta" | "cooldelta" => Ok(Arc::new(CoolDelta)),
        "linear" | "coollinear" => Ok(Arc::new(CoolLinear)),
        "geometric" | "coolgeometric" => Ok(Arc::new(CoolGeometric::default())),
        _ => Err(OptimizeError::UnknownCooling(name.to_string())),
    }
}

fn is_cooling_name(v: &ParamValue) -> bool {
    v.as_name().is_some_and(|n| cooling_by_name(n).is_ok())
}

/// Configuration for the annealing strategy.
///
/// # Examples
///
/// ```
/// use u_metaopt::sa::{AnnealingConfig, CoolLinear};
///
/// let config = AnnealingConfig::default()
///     .with_step(0.1)
///     .with_initial_temperature(100.0)
///     .with_delta_t(1.0)
///     .with_cooling(CoolLinear);
/// assert_eq!(config.cooling.name(), "linear");
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Neighbourhood width `delta`: each component moves by at most `delta / 2`.
    pub step: f64,

    /// Starting temperature `T`.
    pub initial_temperature: f64,

    /// Cooling decrement `deltaT`.
    pub delta_t: f64,

    /// Cooling schedule.
    pub cooling: Arc<dyn CoolingSchedule>,

    /// Convergence threshold `epsilon` in (0, 1).
    ///
    /// Validated and kept for configuration compatibility. The run stops
    /// only on budget exhaustion.
    pub epsilon: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            step: 0.5,
            initial_temperature: 2000.0,
            delta_t: 0.8,
            cooling: Arc::new(CoolDelta),
            epsilon: 1e-23,
        }
    }
}

impl AnnealingConfig {
    pub fn with_step(mut self, delta: f64) -> Self {
        self.step = delta;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    pub fn with_cooling(mut self, cooling: impl CoolingSchedule + 'static) -> Self {
        self.cooling = Arc::new(cooling);
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

const ANNEALING_SPECS: &[ParamSpec] = &[
    ParamSpec {
        name: "delta",
        is_valid: is_positive_number,
        default: || ParamValue::Float(0.5),
    },
    ParamSpec {
        name: "T",
        is_valid: is_positive_number,
        default: || ParamValue::Float(2000.0),
    },
    ParamSpec {
        name: "deltaT",
        is_valid: is_positive_number,
        default: || ParamValue::Float(0.8),
    },
    ParamSpec {
        name: "epsilon",
        is_valid: is_open_unit_float,
        default: || ParamValue::Float(1e-23),
    },
    ParamSpec {
        name: "coolingMethod",
        is_valid: is_cooling_name,
        default: || ParamValue::Name("delta".to_string()),
    },
];

impl Parameters for AnnealingConfig {
    fn specs() -> &'static [ParamSpec] {
        ANNEALING_SPECS
    }

    fn get(&self, name: &str) -> Option<ParamValue> {
        match name {
            "delta" => Some(self.step.into()),
            "T" => Some(self.initial_temperature.into()),
            "deltaT" => Some(self.delta_t.into()),
            "epsilon" => Some(self.epsilon.into()),
            // write-only: custom schedules have no registry name to check
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: &ParamValue) -> bool {
        if name == "coolingMethod" {
            return match value.as_name().map(cooling_by_name) {
                Some(Ok(cooling)) => {
                    self.cooling = cooling;
                    true
                }
                _ => false,
            };
        }
        let Some(x) = value.as_f64() else {
            return false;
        };
        match name {
            "delta" => self.step = x,
            "T" => self.initial_temperature = x,
            "deltaT" => self.delta_t = x,
            "epsilon" => self.epsilon = x,
            _ => return false,
        }
        true
    }
}
