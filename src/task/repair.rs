//! Box-constraint repair policies.

use crate::random::RandomSource;

/// How an out-of-bounds component is brought back into `[lower, upper]`.
///
/// Components already inside the box are never touched, and every policy
/// lands inside the box, so repairing twice gives the same point as
/// repairing once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepairStrategy {
    /// Reflective wrap: `lower + ((value - lower) mod range)`.
    #[default]
    Wrap,
    /// Clamp to the nearest bound.
    Clamp,
    /// Mirror at the violated bound (period `2 * range`).
    Reflect,
    /// Redraw uniformly inside the bounds.
    Random,
}

impl RepairStrategy {
    /// Repairs a single component.
    ///
    /// Bounds that do not describe an interval (a NaN bound, or
    /// `lower > upper`) leave `value` unchanged. [`OptimizationTask`]
    /// rejects such bounds at construction, so this only matters for
    /// direct callers.
    ///
    /// [`OptimizationTask`]: crate::task::OptimizationTask
    pub fn repair_value(&self, value: f64, lower: f64, upper: f64, rng: &mut RandomSource) -> f64 {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return value;
        }
        if (lower..=upper).contains(&value) {
            return value;
        }
        let range = upper - lower;
        if range <= 0.0 || !value.is_finite() {
            return match self {
                RepairStrategy::Random if range > 0.0 => rng.uniform(lower, upper),
                _ if value > upper => upper,
                _ => lower,
            };
        }
        let repaired = match self {
            RepairStrategy::Wrap => lower + (value - lower).rem_euclid(range),
            RepairStrategy::Clamp => value,
            RepairStrategy::Reflect => {
                let t = (value - lower).rem_euclid(2.0 * range);
                if t > range {
                    lower + 2.0 * range - t
                } else {
                    lower + t
                }
            }
            RepairStrategy::Random => rng.uniform(lower, upper),
        };
        // rounding in the modulo can overshoot by an ulp
        repaired.clamp(lower, upper)
    }

    /// Repairs every component of `x` in place.
    pub fn repair_in_place(
        &self,
        x: &mut [f64],
        lower: &[f64],
        upper: &[f64],
        rng: &mut RandomSource,
    ) {
        for ((v, &lo), &hi) in x.iter_mut().zip(lower).zip(upper) {
            *v = self.repair_value(*v, lo, hi, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rng() -> RandomSource {
        RandomSource::from_seed(0)
    }

    #[test]
    fn test_wrap_scenario() {
        let mut r = rng();
        let mut x = [1.5, -0.3];
        RepairStrategy::Wrap.repair_in_place(&mut x, &[0.0, 0.0], &[1.0, 1.0], &mut r);
        assert!((x[0] - 0.5).abs() < 1e-12);
        assert!((x[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_clamp() {
        let mut r = rng();
        assert_eq!(RepairStrategy::Clamp.repair_value(7.0, -1.0, 2.0, &mut r), 2.0);
        assert_eq!(RepairStrategy::Clamp.repair_value(-7.0, -1.0, 2.0, &mut r), -1.0);
    }

    #[test]
    fn test_reflect() {
        let mut r = rng();
        let v = RepairStrategy::Reflect.repair_value(1.25, 0.0, 1.0, &mut r);
        assert!((v - 0.75).abs() < 1e-12);
        let v = RepairStrategy::Reflect.repair_value(-0.25, 0.0, 1.0, &mut r);
        assert!((v - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_in_range_untouched() {
        let mut r = rng();
        for s in [
            RepairStrategy::Wrap,
            RepairStrategy::Clamp,
            RepairStrategy::Reflect,
            RepairStrategy::Random,
        ] {
            assert_eq!(s.repair_value(0.3, 0.0, 1.0, &mut r), 0.3);
            assert_eq!(s.repair_value(1.0, 0.0, 1.0, &mut r), 1.0);
        }
    }

    #[test]
    fn test_zero_width_and_non_finite() {
        let mut r = rng();
        assert_eq!(RepairStrategy::Wrap.repair_value(3.0, 2.0, 2.0, &mut r), 2.0);
        assert_eq!(
            RepairStrategy::Wrap.repair_value(f64::INFINITY, 0.0, 1.0, &mut r),
            1.0
        );
        assert_eq!(RepairStrategy::Wrap.repair_value(f64::NAN, 0.0, 1.0, &mut r), 0.0);
    }

    #[test]
    fn test_nan_bounds_leave_value_untouched() {
        let mut r = rng();
        for s in [
            RepairStrategy::Wrap,
            RepairStrategy::Clamp,
            RepairStrategy::Reflect,
            RepairStrategy::Random,
        ] {
            assert_eq!(s.repair_value(5.0, f64::NAN, 1.0, &mut r), 5.0);
            assert_eq!(s.repair_value(5.0, 0.0, f64::NAN, &mut r), 5.0);
            assert_eq!(s.repair_value(5.0, 2.0, 1.0, &mut r), 5.0);
        }
        let mut x = [3.0, 0.5];
        RepairStrategy::Wrap.repair_in_place(&mut x, &[f64::NAN, 0.0], &[1.0, 1.0], &mut r);
        assert_eq!(x, [3.0, 0.5]);
    }

    fn strategy() -> impl Strategy<Value = RepairStrategy> {
        prop_oneof![
            Just(RepairStrategy::Wrap),
            Just(RepairStrategy::Clamp),
            Just(RepairStrategy::Reflect),
            Just(RepairStrategy::Random),
        ]
    }

    proptest! {
        #[test]
        fn prop_repair_is_contained_and_idempotent(
            s in strategy(),
            lower in -100.0f64..100.0,
            width in 0.0f64..50.0,
            value in -1e6f64..1e6,
            seed in any::<u64>(),
        ) {
            let upper = lower + width;
            let mut r = RandomSource::from_seed(seed);
            let once = s.repair_value(value, lower, upper, &mut r);
            prop_assert!(once >= lower && once <= upper);
            let twice = s.repair_value(once, lower, upper, &mut r);
            prop_assert_eq!(once.to_bits(), twice.to_bits());
        }
    }
}
