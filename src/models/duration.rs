//! Numeric time unit for job durations.
//!
//! Durations may be integral (whole hours, ticks, milliseconds) or real
//! (fractional hours). Every algorithm in this crate is generic over
//! [`Duration`] so callers keep their own unit.

use std::fmt;
use std::ops::{Add, Sub};

/// A processing-time value.
///
/// `Default` must yield zero: it is the origin of both machine clocks.
///
/// Subtraction is only ever applied as `a - b` with `a > b`, so unsigned
/// types never underflow.
pub trait Duration:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Default
    + fmt::Debug
    + fmt::Display
{
    /// Lossy conversion used for ratio metrics (utilization).
    fn to_f64(self) -> f64;

    /// Zero duration.
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    /// Larger of two values. Incomparable values (NaN) keep `self`.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Smaller of two values. Incomparable values (NaN) keep `self`.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Strictly greater than zero (false for NaN).
    #[inline]
    fn is_strictly_positive(self) -> bool {
        self > Self::zero()
    }

    /// Neither infinite nor NaN. Always true for integers.
    fn is_finite_value(self) -> bool;

    /// Addition that reports overflow (integers) or a non-finite
    /// result (floats) as `None`.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_duration {
    ($($t:ty),* $(,)?) => {
        $(
            impl Duration for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_duration {
    ($($t:ty),* $(,)?) => {
        $(
            impl Duration for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_integer_duration!(i32, i64, u32, u64);
impl_float_duration!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_default() {
        assert_eq!(<i64 as Duration>::zero(), 0);
        assert_eq!(<f64 as Duration>::zero(), 0.0);
    }

    #[test]
    fn test_max_min() {
        assert_eq!(3_i64.max_of(7), 7);
        assert_eq!(3_i64.min_of(7), 3);
        assert_eq!(2.5_f64.max_of(1.0), 2.5);
    }

    #[test]
    fn test_nan_keeps_self() {
        assert_eq!(1.0_f64.max_of(f64::NAN), 1.0);
        assert_eq!(1.0_f64.min_of(f64::NAN), 1.0);
    }

    #[test]
    fn test_is_strictly_positive() {
        assert!(1_u32.is_strictly_positive());
        assert!(!0_u32.is_strictly_positive());
        assert!(!(-3_i32).is_strictly_positive());
        assert!(2.5_f64.is_strictly_positive());
        assert!(!(-0.0_f64).is_strictly_positive());
    }

    #[test]
    fn test_nan_is_not_strictly_positive() {
        // Concrete floats must reach the trait, not the sign check.
        assert!(!f64::NAN.is_strictly_positive());
        assert!(!Duration::is_strictly_positive(f32::NAN));
    }

    #[test]
    fn test_is_finite_value() {
        assert!(i64::MAX.is_finite_value());
        assert!(1.5_f64.is_finite_value());
        assert!(!f64::INFINITY.is_finite_value());
        assert!(!f64::NAN.is_finite_value());
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(2_i64.checked_sum(3), Some(5));
        assert_eq!(i64::MAX.checked_sum(1), None);
        assert_eq!(u32::MAX.checked_sum(1), None);
        assert_eq!(1.5_f64.checked_sum(2.0), Some(3.5));
        assert_eq!(f64::MAX.checked_sum(f64::MAX), None);
    }
}
