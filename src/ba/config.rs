//! Bat algorithm configuration.

use crate::params::{
    is_number, is_positive_int, is_positive_number, ParamSpec, ParamValue, Parameters,
};

/// Configuration for the frequency-tuned swarm (bat algorithm).
///
/// # Examples
///
/// ```
/// use u_metaopt::ba::SwarmConfig;
///
/// let config = SwarmConfig::default()
///     .with_population_size(20)
///     .with_loudness(0.9)
///     .with_pulse_rate(0.3)
///     .with_frequency_range(0.0, 1.5);
/// assert_eq!(config.population_size, 20);
/// ```
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    /// Number of bats (`NP`). Each iteration costs this many evaluations.
    pub population_size: usize,

    /// Loudness `A`: probability of accepting a non-worsening move.
    pub loudness: f64,

    /// Pulse rate `r`: a local walk around the best replaces the flight
    /// with probability `1 - r`.
    pub pulse_rate: f64,

    /// Lower frequency bound `Qmin`. May be zero or negative.
    pub min_frequency: f64,

    /// Upper frequency bound `Qmax`.
    pub max_frequency: f64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            population_size: 40,
            loudness: 0.5,
            pulse_rate: 0.5,
            min_frequency: 0.0,
            max_frequency: 2.0,
        }
    }
}

impl SwarmConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_loudness(mut self, a: f64) -> Self {
        self.loudness = a;
        self
    }

    pub fn with_pulse_rate(mut self, r: f64) -> Self {
        self.pulse_rate = r;
        self
    }

    /// Sets `Qmin` and `Qmax`. Equal bounds give every bat the same frequency.
    pub fn with_frequency_range(mut self, q_min: f64, q_max: f64) -> Self {
        self.min_frequency = q_min;
        self.max_frequency = q_max;
        self
    }
}

const SWARM_SPECS: &[ParamSpec] = &[
    ParamSpec {
        name: "NP",
        is_valid: is_positive_int,
        default: || ParamValue::Int(40),
    },
    ParamSpec {
        name: "A",
        is_valid: is_positive_number,
        default: || ParamValue::Float(0.5),
    },
    ParamSpec {
        name: "r",
        is_valid: is_positive_number,
        default: || ParamValue::Float(0.5),
    },
    ParamSpec {
        name: "Qmin",
        is_valid: is_number,
        default: || ParamValue::Float(0.0),
    },
    ParamSpec {
        name: "Qmax",
        is_valid: is_number,
        default: || ParamValue::Float(2.0),
    },
];

impl Parameters for SwarmConfig {
    fn specs() -> &'static [ParamSpec] {
        SWARM_SPECS
    }

    fn get(&self, name: &str) -> Option<ParamValue> {
        match name {
            "NP" => Some(self.population_size.into()),
            "A" => Some(self.loudness.into()),
            "r" => Some(self.pulse_rate.into()),
            "Qmin" => Some(self.min_frequency.into()),
            "Qmax" => Some(self.max_frequency.into()),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: &ParamValue) -> bool {
        if name == "NP" {
            return match value.as_int().and_then(|n| usize::try_from(n).ok()) {
                Some(n) => {
                    self.population_size = n;
                    true
                }
                None => false,
            };
        }
        let Some(x) = value.as_f64() else {
            return false;
        };
        match name {
            "A" => self.loudness = x,
            "r" => self.pulse_rate = x,
            "Qmin" => self.min_frequency = x,
            "Qmax" => self.max_frequency = x,
            _ => return false,
        }
        true
    }
}
