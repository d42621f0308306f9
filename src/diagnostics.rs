//! Informational notices raised while configuring an algorithm.
//!
//! Notices are collected in an explicit [`Diagnostics`] sink owned by the
//! algorithm instance, so independent runs never share state. Each notice
//! is also forwarded to the `log` facade at `info` level.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal configuration notice.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Diagnostic {
    /// A supplied value failed its predicate; the default was used instead.
    InvalidParameter {
        name: String,
        value: String,
        default: String,
    },
    /// The option name is not recognized by the strategy and was ignored.
    UnusedParameter { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidParameter {
                name,
                value,
                default,
            } => write!(
                f,
                "invalid value {value} for parameter `{name}`, using default {default}"
            ),
            Diagnostic::UnusedParameter { name } => write!(f, "unused argument `{name}`"),
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and forwards it to the log facade.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::info!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Names of all parameters that were reported as unused.
    pub fn unused_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnusedParameter { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}
