//! Named, validated algorithm parameters.
//!
//! Every strategy keeps its parameters in a typed config struct and
//! describes them with a table of [`ParamSpec`] entries: a name, a
//! validity predicate and a default. The table drives two paths:
//!
//! - [`Parameters::validate`]: strict, returns the first violation.
//! - [`Parameters::sanitize`] / [`Parameters::apply`]: lenient, replaces
//!   invalid values with defaults and records a [`Diagnostic`] for each
//!   substitution or unrecognized option.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::OptimizeError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Name(String),
}

impl ParamValue {
    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(n) => Some(*n as f64),
            ParamValue::Float(x) => Some(*x),
            ParamValue::Name(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            ParamValue::Name(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Name(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(n as i64)
    }
}

impl From<usize> for ParamValue {
    fn from(n: usize) -> Self {
        ParamValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Name(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Name(s)
    }
}

/// Dictionary-style options keyed by parameter name.
///
/// # Examples
///
/// ```
/// use u_metaopt::params::ParameterSet;
///
/// let options = ParameterSet::new()
///     .with("NP", 20)
///     .with("A", 0.9)
///     .with("Qmax", 1.5);
/// assert_eq!(options.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ParameterSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Declaration of one recognized parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub is_valid: fn(&ParamValue) -> bool,
    pub default: fn() -> ParamValue,
}

/// Integer strictly greater than zero.
pub fn is_positive_int(v: &ParamValue) -> bool {
    v.as_int().is_some_and(|n| n > 0)
}

/// Finite number (int or float) strictly greater than zero.
pub fn is_positive_number(v: &ParamValue) -> bool {
    v.as_f64().is_some_and(|x| x.is_finite() && x > 0.0)
}

/// Any finite number.
pub fn is_number(v: &ParamValue) -> bool {
    v.as_f64().is_some_and(f64::is_finite)
}

/// A float in the open interval `(0, 1)`.
pub fn is_open_unit_float(v: &ParamValue) -> bool {
    matches!(v, ParamValue::Float(x) if *x > 0.0 && *x < 1.0)
}

/// A typed parameter set described by a [`ParamSpec`] table.
pub trait Parameters: Clone + Default {
    /// All recognized parameters.
    fn specs() -> &'static [ParamSpec];

    /// Current value of a recognized parameter.
    fn get(&self, name: &str) -> Option<ParamValue>;

    /// Stores a value that already passed its predicate.
    ///
    /// Returns `false` when the name is unknown or the value cannot be
    /// represented.
    fn set(&mut self, name: &str, value: &ParamValue) -> bool;

    fn spec(name: &str) -> Option<&'static ParamSpec> {
        Self::specs().iter().find(|s| s.name == name)
    }

    /// Strict check of every current value.
    fn validate(&self) -> Result<(), OptimizeError> {
        for spec in Self::specs() {
            if let Some(value) = self.get(spec.name) {
                if !(spec.is_valid)(&value) {
                    return Err(OptimizeError::InvalidParameter {
                        name: spec.name.to_string(),
                        reason: format!("value {value} rejected"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Replaces every invalid current value with its default.
    fn sanitize(&mut self, diagnostics: &mut Diagnostics) {
        for spec in Self::specs() {
            let Some(value) = self.get(spec.name) else {
                continue;
            };
            if !(spec.is_valid)(&value) {
                let default = (spec.default)();
                self.set(spec.name, &default);
                diagnostics.push(Diagnostic::InvalidParameter {
                    name: spec.name.to_string(),
                    value: value.to_string(),
                    default: default.to_string(),
                });
            }
        }
    }

    /// Applies named options: valid values are stored, invalid ones fall
    /// back to the default, unknown names are reported and ignored.
    fn apply(&mut self, options: &ParameterSet, diagnostics: &mut Diagnostics) {
        for (name, value) in options.iter() {
            match Self::spec(name) {
                Some(spec) => {
                    if (spec.is_valid)(value) && self.set(spec.name, value) {
                        continue;
                    }
                    let default = (spec.default)();
                    self.set(spec.name, &default);
                    diagnostics.push(Diagnostic::InvalidParameter {
                        name: spec.name.to_string(),
                        value: value.to_string(),
                        default: default.to_string(),
                    });
                }
                None => diagnostics.push(Diagnostic::UnusedParameter {
                    name: name.to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Toy {
        size: usize,
        rate: f64,
    }

    impl Default for Toy {
        fn default() -> Self {
            Self { size: 10, rate: 0.5 }
        }
    }

    const TOY_SPECS: &[ParamSpec] = &[
        ParamSpec {
            name: "size",
            is_valid: is_positive_int,
            default: || ParamValue::Int(10),
        },
        ParamSpec {
            name: "rate",
            is_valid: is_positive_number,
            default: || ParamValue::Float(0.5),
        },
    ];

    impl Parameters for Toy {
        fn specs() -> &'static [ParamSpec] {
            TOY_SPECS
        }

        fn get(&self, name: &str) -> Option<ParamValue> {
            match name {
                "size" => Some(self.size.into()),
                "rate" => Some(self.rate.into()),
                _ => None,
            }
        }

        fn set(&mut self, name: &str, value: &ParamValue) -> bool {
            match name {
                "size" => match value.as_int().and_then(|n| usize::try_from(n).ok()) {
                    Some(n) => {
                        self.size = n;
                        true
                    }
                    None => false,
                },
                "rate" => match value.as_f64() {
                    Some(x) => {
                        self.rate = x;
                        true
                    }
                    None => false,
                },
                _ => false,
            }
        }
    }

    #[test]
    fn test_predicates() {
        assert!(is_positive_int(&ParamValue::Int(1)));
        assert!(!is_positive_int(&ParamValue::Int(0)));
        assert!(!is_positive_int(&ParamValue::Float(3.0)));
        assert!(is_positive_number(&ParamValue::Int(2)));
        assert!(!is_positive_number(&ParamValue::Float(f64::NAN)));
        assert!(is_number(&ParamValue::Float(-4.0)));
        assert!(!is_number(&ParamValue::Name("x".into())));
        assert!(is_open_unit_float(&ParamValue::Float(1e-23)));
        assert!(!is_open_unit_float(&ParamValue::Float(1.0)));
        assert!(!is_open_unit_float(&ParamValue::Int(0)));
    }

    #[test]
    fn test_apply_valid_invalid_unknown() {
        let mut toy = Toy::default();
        let mut diag = Diagnostics::new();
        let options = ParameterSet::new()
            .with("size", 25)
            .with("rate", -1.0)
            .with("colour", "blue");
        toy.apply(&options, &mut diag);

        assert_eq!(toy.size, 25);
        assert_eq!(toy.rate, 0.5);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.unused_names(), vec!["colour"]);
    }

    #[test]
    fn test_validate_and_sanitize() {
        let mut toy = Toy { size: 0, rate: 2.0 };
        assert!(matches!(
            toy.validate(),
            Err(OptimizeError::InvalidParameter { ref name, .. }) if name == "size"
        ));

        let mut diag = Diagnostics::new();
        toy.sanitize(&mut diag);
        assert_eq!(toy.size, 10);
        assert_eq!(toy.rate, 2.0);
        assert_eq!(diag.len(), 1);
        assert!(toy.validate().is_ok());
    }

    #[test]
    fn test_parameter_set_iteration_order() {
        let options = ParameterSet::new().with("b", 1).with("a", 2.0);
        let names: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(options.get("a"), Some(&ParamValue::Float(2.0)));
    }
}
