//! Instants → exact nanosecond offsets → whole pulses.
//!
//! Offsets between instants are taken as integer nanoseconds, so every
//! division by the pulse (3 + √5 s) happens in Q(√5) with no rounding until
//! the final floor. Floors go toward −∞: an instant one nanosecond before
//! an anchor is pulse −1, never pulse 0.

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};

use crate::constants::{CALENDAR_DAY_PULSES_DENOM, CALENDAR_DAY_PULSES_NUMER, NANOS_PER_SEC};
use crate::surd::Surd;

/// Calendar day length in pulses (17,491.270421), exact.
pub fn calendar_day_pulses() -> BigRational {
    BigRational::new(
        BigInt::from(CALENDAR_DAY_PULSES_NUMER),
        BigInt::from(CALENDAR_DAY_PULSES_DENOM),
    )
}

/// One pulse in nanoseconds: (3 + √5) × 10⁹.
pub fn pulse_nanos() -> Surd {
    Surd::pulse().scale(&BigRational::from_integer(BigInt::from(NANOS_PER_SEC)))
}

/// Pulses per nanosecond: (3 − √5) / (4 × 10⁹).
pub fn pulses_per_nano() -> Surd {
    Surd::pulse_recip().scale(&BigRational::new(BigInt::from(1), BigInt::from(NANOS_PER_SEC)))
}

/// Calendar days per nanosecond.
pub fn days_per_nano() -> Surd {
    pulses_per_nano().scale(&BigRational::new(
        BigInt::from(CALENDAR_DAY_PULSES_DENOM),
        BigInt::from(CALENDAR_DAY_PULSES_NUMER),
    ))
}

/// One calendar day in nanoseconds: 17,491.270421 × (3 + √5) × 10⁹.
pub fn calendar_day_nanos() -> Surd {
    pulse_nanos().scale(&calendar_day_pulses())
}

/// Nanoseconds since the Unix epoch, exact.
pub fn unix_nanos(instant: &DateTime<Utc>) -> BigInt {
    BigInt::from(instant.timestamp()) * BigInt::from(NANOS_PER_SEC)
        + BigInt::from(instant.timestamp_subsec_nanos())
}

/// Signed nanoseconds from `anchor` to `instant`.
pub fn offset_nanos(anchor: &DateTime<Utc>, instant: &DateTime<Utc>) -> BigInt {
    unix_nanos(instant) - unix_nanos(anchor)
}

/// floor(nanos / pulse)
pub fn pulses_in(nanos: &BigInt) -> BigInt {
    (&Surd::from(nanos.clone()) * &pulses_per_nano()).floor()
}

/// Whole pulses elapsed from `anchor` to `instant`.
pub fn elapsed_pulses(anchor: &DateTime<Utc>, instant: &DateTime<Utc>) -> BigInt {
    pulses_in(&offset_nanos(anchor, instant))
}

/// Position inside a day of `CalendarDayPulses × PulseDuration` seconds that
/// restarts at every `anchor + k` boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchoredDay {
    /// k: whole days since the anchor (negative before it).
    pub day_index: BigInt,
    /// Whole pulses since the most recent boundary, in `[0, 17491]`.
    pub pulses_into_day: BigInt,
}

/// Locate `instant` within the anchored day cycle.
pub fn anchored_day(anchor: &DateTime<Utc>, instant: &DateTime<Utc>) -> AnchoredDay {
    let offset = Surd::from(offset_nanos(anchor, instant));
    let day_index = (&offset * &days_per_nano()).floor();
    let boundary = calendar_day_nanos().scale(&BigRational::from_integer(day_index.clone()));
    let since_boundary = &offset - &boundary;
    let pulses_into_day = (&since_boundary * &pulses_per_nano()).floor();
    AnchoredDay {
        day_index,
        pulses_into_day,
    }
}

/// x − floor(x / period) × period, always in `[0, period)` for a positive period.
pub fn rem_floor(x: &BigRational, period: &BigRational) -> BigRational {
    x - (x / period).floor() * period
}

/// Narrow to i64, saturating at the bounds. Values derived from chrono
/// instants stay far inside the i64 range.
pub fn saturating_i64(n: &BigInt) -> i64 {
    n.to_i64()
        .unwrap_or(if n.is_negative() { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{canonical_genesis, canonical_sunrise};
    use chrono::TimeDelta;
    use num_integer::Integer;

    /// Independent reference: floor(n / ((3 + √5)·10⁹)) = floor(n(3 − √5) / (4·10⁹)),
    /// decided with a plain integer square root.
    fn reference_pulses(n: i128) -> i128 {
        let n = BigInt::from(n);
        let d = BigInt::from(4 * NANOS_PER_SEC);
        let root = (&n * &n * BigInt::from(5)).sqrt();
        let numer = if n.is_negative() {
            BigInt::from(3) * &n + &root
        } else if n == BigInt::from(0) {
            BigInt::from(0)
        } else {
            BigInt::from(3) * &n - &root - 1
        };
        numer.div_floor(&d).to_i128().unwrap()
    }

    #[test]
    fn test_per_nano_rates_invert_lengths() {
        assert_eq!(&pulse_nanos() * &pulses_per_nano(), Surd::one());
        assert_eq!(&calendar_day_nanos() * &days_per_nano(), Surd::one());
    }

    #[test]
    fn test_genesis_is_pulse_zero() {
        let g = canonical_genesis();
        assert_eq!(elapsed_pulses(&g, &g), BigInt::from(0));
    }

    #[test]
    fn test_one_nanosecond_before_is_minus_one() {
        let g = canonical_genesis();
        let before = g - TimeDelta::nanoseconds(1);
        assert_eq!(elapsed_pulses(&g, &before), BigInt::from(-1));
    }

    #[test]
    fn test_pulse_boundary() {
        // One pulse = 5_236_067_977.49... ns
        assert_eq!(pulses_in(&BigInt::from(5_236_067_977i64)), BigInt::from(0));
        assert_eq!(pulses_in(&BigInt::from(5_236_067_978i64)), BigInt::from(1));
        assert_eq!(pulses_in(&BigInt::from(-5_236_067_977i64)), BigInt::from(-1));
        assert_eq!(pulses_in(&BigInt::from(-5_236_067_978i64)), BigInt::from(-2));
    }

    #[test]
    fn test_matches_reference_at_large_offsets() {
        // ~10⁷ pulses and beyond, both directions
        for n in [
            52_360_679_774_997_897i128,
            52_360_679_774_997_896,
            1_000_000_000_000_000_000,
            -987_654_321_123_456_789,
            31_415_926_535_897_932,
        ] {
            assert_eq!(
                pulses_in(&BigInt::from(n)),
                BigInt::from(reference_pulses(n)),
                "offset {n} ns"
            );
        }
    }

    #[test]
    fn test_anchored_day_at_genesis() {
        // Genesis sits 2545 pulses into the solar day before the sunrise anchor.
        let day = anchored_day(&canonical_sunrise(), &canonical_genesis());
        assert_eq!(day.day_index, BigInt::from(-1));
        assert_eq!(day.pulses_into_day, BigInt::from(2545));
    }

    #[test]
    fn test_anchored_day_at_anchor() {
        let s = canonical_sunrise();
        let day = anchored_day(&s, &s);
        assert_eq!(day.day_index, BigInt::from(0));
        assert_eq!(day.pulses_into_day, BigInt::from(0));
    }

    #[test]
    fn test_anchored_day_stays_in_range() {
        let s = canonical_sunrise();
        for hours in (-200..200).step_by(7) {
            let t = s + TimeDelta::minutes(hours * 61 + 13);
            let day = anchored_day(&s, &t);
            let p = saturating_i64(&day.pulses_into_day);
            assert!((0..=17_491).contains(&p), "pulses into day {p}");
        }
    }

    #[test]
    fn test_rem_floor_is_non_negative() {
        let day = calendar_day_pulses();
        let r = rem_floor(&BigRational::from_integer(BigInt::from(-1)), &day);
        assert_eq!(r, &day - BigRational::from_integer(BigInt::from(1)));
        let r = rem_floor(&BigRational::from_integer(BigInt::from(17_492)), &day);
        assert_eq!(r, BigRational::new(BigInt::from(729_579), BigInt::from(1_000_000)));
    }

    #[test]
    fn test_saturating_i64() {
        assert_eq!(saturating_i64(&BigInt::from(42)), 42);
        assert_eq!(saturating_i64(&(BigInt::from(i64::MAX) * 4)), i64::MAX);
        assert_eq!(saturating_i64(&(BigInt::from(i64::MIN) * 4)), i64::MIN);
    }
}
