//! Fractions of one pulse and their physical readings.
//!
//! Each unit is `P / k` seconds for a divisor `k` drawn from the lattice
//! numbers (2, 11, 33, 55) and the Fibonacci run 89..1597. Durations,
//! frequencies and wavelengths are exact in Q(√5) and floored for display.

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::Serialize;

use crate::constants::{PHYSICS_SCALE, SPEED_OF_LIGHT_M_S, SPEED_OF_SOUND_M_S, SUBDIVISIONS};
use crate::fixed::Fixed;
use crate::pulse::saturating_i64;
use crate::surd::Surd;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subdivision {
    pub key: &'static str,
    pub divisor: u32,
    pub resonant_name: &'static str,
    /// P / k seconds
    pub duration_seconds: Fixed,
    /// Whole units elapsed since genesis: EP × k.
    pub count: i64,
    pub frequency_hz: Fixed,
    pub wavelength_sound_m: Fixed,
    pub wavelength_light_m: Fixed,
}

impl Subdivision {
    fn new(key: &'static str, divisor: u32, resonant_name: &'static str, elapsed: &BigInt) -> Self {
        let k = BigRational::from_integer(BigInt::from(divisor));
        let duration = Surd::pulse().scale(&k.recip());
        // k / P = k (3 − √5) / 4
        let frequency = Surd::pulse()
            .conjugate()
            .scale(&(&k / BigRational::from_integer(BigInt::from(4))));

        Self {
            key,
            divisor,
            resonant_name,
            duration_seconds: Fixed::floor_surd(&duration, PHYSICS_SCALE),
            count: saturating_i64(&(elapsed * BigInt::from(divisor))),
            frequency_hz: Fixed::floor_surd(&frequency, PHYSICS_SCALE),
            wavelength_sound_m: Fixed::floor_surd(
                &duration.scale(&speed(SPEED_OF_SOUND_M_S)),
                PHYSICS_SCALE,
            ),
            wavelength_light_m: Fixed::floor_surd(
                &duration.scale(&speed(SPEED_OF_LIGHT_M_S)),
                PHYSICS_SCALE,
            ),
        }
    }
}

fn speed(metres_per_second: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(metres_per_second))
}

/// All eleven subdivisions, finest last, with live counts for `elapsed`.
pub fn subdivision_table(elapsed: &BigInt) -> Vec<Subdivision> {
    SUBDIVISIONS
        .iter()
        .map(|&(key, divisor, name)| Subdivision::new(key, divisor, name, elapsed))
        .collect()
}
