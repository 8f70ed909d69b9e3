//! Beat/step lattice (36 beats × 44 steps × 11 pulses = 17,424 per day).
//!
//! The lattice day and the φ-calendar day (17,491.270421 pulses) are two
//! clocks. A position inside a calendar day is carried onto the lattice by
//! `floor(position × 17424 / 17491.270421)`; nothing else converts between
//! them.

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::Serialize;

use crate::constants::{
    GRID_BEATS_PER_DAY, GRID_PULSES_PER_BEAT, GRID_PULSES_PER_DAY, GRID_PULSES_PER_STEP,
    GRID_STEPS_PER_BEAT,
};
use crate::fixed::Fixed;
use crate::pulse::{calendar_day_pulses, saturating_i64};

/// Position on the beat/step lattice within one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    /// Lattice pulses since the start of the day, in `[0, 17424)`.
    pub grid_pulses_into_day: u32,
    pub beat_index: u32,
    pub step_index: u32,
    pub pulses_into_step: u32,
    pub percent_into_step: Fixed,
    pub percent_into_beat: Fixed,
    pub beats_per_day: u32,
    pub steps_per_beat: u32,
}

impl GridCoordinate {
    /// Split lattice pulses into beat, step and pulse. Input is wrapped into
    /// `[0, 17424)` first.
    pub fn from_grid_pulses(grid_pulses: u32) -> Self {
        let grid = grid_pulses % GRID_PULSES_PER_DAY;
        let beat_index = grid / GRID_PULSES_PER_BEAT;
        let into_beat = grid % GRID_PULSES_PER_BEAT;
        let step_index = into_beat / GRID_PULSES_PER_STEP;
        let pulses_into_step = into_beat % GRID_PULSES_PER_STEP;

        Self {
            grid_pulses_into_day: grid,
            beat_index,
            step_index,
            pulses_into_step,
            percent_into_step: Fixed::percent(
                &ratio(pulses_into_step, GRID_PULSES_PER_STEP),
                &one(),
            ),
            percent_into_beat: Fixed::percent(&ratio(into_beat, GRID_PULSES_PER_BEAT), &one()),
            beats_per_day: GRID_BEATS_PER_DAY,
            steps_per_beat: GRID_STEPS_PER_BEAT,
        }
    }

    /// Project a position inside a calendar day onto the lattice.
    pub fn from_calendar_position(pulses_into_calendar_day: &BigRational) -> Self {
        Self::from_grid_pulses(project_to_grid(pulses_into_calendar_day))
    }

    /// `beat:step`, step zero-padded: `29:07`.
    pub fn step_string(&self) -> String {
        format!("{}:{:02}", self.beat_index, self.step_index)
    }
}

/// floor(position × 17424 / CalendarDayPulses), clamped into the lattice.
pub fn project_to_grid(pulses_into_calendar_day: &BigRational) -> u32 {
    let lattice = BigRational::from_integer(BigInt::from(GRID_PULSES_PER_DAY));
    let projected = (pulses_into_calendar_day * lattice / calendar_day_pulses())
        .floor()
        .to_integer();
    saturating_i64(&projected).clamp(0, i64::from(GRID_PULSES_PER_DAY - 1)) as u32
}

fn ratio(n: u32, d: u32) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn one() -> BigRational {
    ratio(1, 1)
}
