//! Phi-spiral level and epoch thresholds.
//!
//! The spiral level is floor(log_φ(pulses)), found by exponential then
//! binary search on exact powers φⁿ. Epoch thresholds scale one calendar
//! year of pulses by φᵖ for a fixed set of exponents.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use serde::Serialize;

use crate::calendar::year_pulses;
use crate::constants::{DAYS_SCALE, SECONDS_PER_CHRONOS_DAY, SPIRAL_EPOCHS};
use crate::fixed::Fixed;
use crate::pulse::{calendar_day_pulses, saturating_i64};
use crate::surd::Surd;

/// floor(log_φ(max(pulses, 1))). Zero at and before genesis.
pub fn spiral_level(elapsed: &BigInt) -> u32 {
    if *elapsed <= BigInt::from(1) {
        return 0;
    }
    let target = Surd::from(elapsed.clone());
    let phi = Surd::phi();
    let fits = |n: u32| phi.pow(n) <= target;

    // Exponential search for an exponent past the target.
    let mut hi = 1u32;
    while fits(hi) {
        hi = hi.saturating_mul(2);
    }
    // Invariant: φ^lo ≤ target < φ^hi
    let mut lo = hi / 2;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Fewest whole pulses at spiral level `n`: ⌈φⁿ⌉.
pub fn level_threshold(n: u32) -> BigInt {
    let power = Surd::phi().pow(n);
    let floor = power.floor();
    if Surd::from(floor.clone()) == power {
        floor
    } else {
        floor + 1
    }
}

/// One φ-scaled epoch and where the current instant stands against it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochRecord {
    pub name: &'static str,
    pub phi_power: u32,
    /// ⌊YearPulses × φᵖ⌋
    pub threshold_pulses: i64,
    /// Threshold length in real-world days.
    pub chronos_days: Fixed,
    /// Threshold length in calendar days.
    pub kairos_days: Fixed,
    pub pulses_until: i64,
    pub days_until: Fixed,
    pub percent_elapsed: Fixed,
}

/// Build the epoch table for a pulse count.
pub fn epoch_table(elapsed: &BigInt) -> Vec<EpochRecord> {
    let year = Surd::from_rational(year_pulses());
    let phi = Surd::phi();
    let ep = BigRational::from_integer(elapsed.clone());

    SPIRAL_EPOCHS
        .iter()
        .map(|&(phi_power, name)| {
            let threshold = (&year * &phi.pow(phi_power)).floor();
            let remaining = {
                let r = &threshold - elapsed;
                if r.is_negative() { BigInt::zero() } else { r }
            };
            let threshold_r = BigRational::from_integer(threshold.clone());

            EpochRecord {
                name,
                phi_power,
                threshold_pulses: saturating_i64(&threshold),
                chronos_days: chronos_days(&threshold),
                kairos_days: Fixed::floor_rational(
                    &(&threshold_r / calendar_day_pulses()),
                    DAYS_SCALE,
                ),
                pulses_until: saturating_i64(&remaining),
                days_until: chronos_days(&remaining),
                percent_elapsed: Fixed::percent_unclamped(&ep, &threshold_r),
            }
        })
        .collect()
}

/// pulses × (3 + √5) / 86400, floored to [`DAYS_SCALE`] places.
fn chronos_days(pulses: &BigInt) -> Fixed {
    let per_day = BigRational::new(BigInt::from(1), BigInt::from(SECONDS_PER_CHRONOS_DAY));
    let seconds = Surd::pulse().scale(&BigRational::from_integer(pulses.clone()));
    Fixed::floor_surd(&seconds.scale(&per_day), DAYS_SCALE)
}
