//! Fixed-scale decimals for reporting exact values.
//!
//! Every non-integer quantity in a [`ClockState`](crate::ClockState) is
//! computed exactly and then floored to a fixed number of decimal places.
//! Display and JSON use the shortest form: trailing zeros are trimmed, so
//! `0.000000` renders as `0` and `97.720000` as `97.72`.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Serialize, Serializer};

use crate::constants::{PERCENT_CEILING_MICROS, PERCENT_SCALE};
use crate::surd::Surd;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fixed {
    units: BigInt,
    scale: u32,
}

impl Fixed {
    /// `units × 10^-scale`
    pub fn new(units: BigInt, scale: u32) -> Self {
        Self { units, scale }
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self::new(n.into(), 0)
    }

    /// Floor a rational to `scale` decimal places.
    pub fn floor_rational(value: &BigRational, scale: u32) -> Self {
        let factor = BigRational::from_integer(pow10(scale));
        Self::new((value * factor).floor().to_integer(), scale)
    }

    /// Floor a Q(√5) value to `scale` decimal places.
    pub fn floor_surd(value: &Surd, scale: u32) -> Self {
        Self::new(value.floor_scaled(scale), scale)
    }

    /// `part / whole × 100`, floored and clamped to `[0, 99.999999]`.
    pub fn percent(part: &BigRational, whole: &BigRational) -> Self {
        let raw = Self::percent_unclamped(part, whole);
        let ceiling = BigInt::from(PERCENT_CEILING_MICROS);
        let units = if raw.units.is_negative() {
            BigInt::zero()
        } else if raw.units > ceiling {
            ceiling
        } else {
            raw.units
        };
        Self::new(units, PERCENT_SCALE)
    }

    /// `part / whole × 100`, floored. Zero when `whole` is zero.
    pub fn percent_unclamped(part: &BigRational, whole: &BigRational) -> Self {
        if whole.is_zero() {
            return Self::new(BigInt::zero(), PERCENT_SCALE);
        }
        let hundred = BigRational::from_integer(BigInt::from(100));
        Self::floor_rational(&(part / whole * hundred), PERCENT_SCALE)
    }

    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    pub fn to_f64(&self) -> f64 {
        let units = self.units.to_f64().unwrap_or(f64::NAN);
        units / 10f64.powi(self.scale as i32)
    }
}

fn pow10(places: u32) -> BigInt {
    BigInt::from(10).pow(places)
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units.is_negative() { "-" } else { "" };
        let (whole, frac) = self.units.abs().div_rem(&pow10(self.scale));
        if self.scale == 0 || frac.is_zero() {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{frac:0>width$}", width = self.scale as usize);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(Fixed::new(BigInt::from(97_720_000), 6).to_string(), "97.72");
        assert_eq!(Fixed::new(BigInt::from(0), 6).to_string(), "0");
        assert_eq!(Fixed::new(BigInt::from(5_000_001), 6).to_string(), "5.000001");
        assert_eq!(Fixed::from_integer(42).to_string(), "42");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Fixed::new(BigInt::from(-1_250_000), 6).to_string(), "-1.25");
        assert_eq!(Fixed::new(BigInt::from(-5), 6).to_string(), "-0.000005");
    }

    #[test]
    fn test_floor_rational_rounds_down() {
        assert_eq!(Fixed::floor_rational(&ratio(2, 3), 4).to_string(), "0.6666");
        assert_eq!(Fixed::floor_rational(&ratio(-2, 3), 4).to_string(), "-0.6667");
    }

    #[test]
    fn test_percent_clamps_to_ceiling() {
        assert_eq!(Fixed::percent(&ratio(1, 1), &ratio(1, 1)).to_string(), "99.999999");
        assert_eq!(Fixed::percent(&ratio(-1, 1), &ratio(3, 1)).to_string(), "0");
        assert_eq!(Fixed::percent(&ratio(1, 4), &ratio(1, 1)).to_string(), "25");
    }

    #[test]
    fn test_percent_zero_whole() {
        assert!(Fixed::percent_unclamped(&ratio(5, 1), &ratio(0, 1)).is_zero());
    }

    #[test]
    fn test_percent_unclamped_exceeds_hundred() {
        assert_eq!(Fixed::percent_unclamped(&ratio(3, 1), &ratio(2, 1)).to_string(), "150");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Fixed::new(BigInt::from(1_500), 3)).unwrap();
        assert_eq!(json, "\"1.5\"");
    }

    #[test]
    fn test_to_f64() {
        approx::assert_relative_eq!(Fixed::new(BigInt::from(12_345), 3).to_f64(), 12.345);
    }
}
