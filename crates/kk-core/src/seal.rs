//! Compact seal strings.
//!
//! Every seal is a plain format of fields already present on a
//! [`ClockState`]; a caller holding the state can rebuild them exactly.

use serde::Serialize;

use crate::clock::ClockState;
use crate::constants::{GRID_BEATS_PER_DAY, GRID_STEPS_PER_BEAT};
use crate::grid::GridCoordinate;

const SEPARATOR: &str = " • ";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seals {
    /// `Kairos:0:00, Solhara, Ignite Ark`
    pub kairos: String,
    /// `D1/M1`
    pub day_month: String,
    /// `Beat:0/36(0%) Step:0/44 Kai(Today):0`
    pub step_percent: String,
    /// `Y0 PS0`
    pub year_spiral: String,
    /// `Solar Kairos (UTC-aligned): 5:10 Kaelith D42/M8, Ignite Ark  Beat:5/36 Step:10/44`
    pub solar: String,
    /// All of the above joined, ending in the eternal pulse count.
    pub eternal: String,
}

impl Seals {
    pub fn from_state(state: &ClockState) -> Self {
        let cal = &state.calendar;
        let sol = &state.solar_calendar;

        let kairos = format!(
            "Kairos:{}, {}, {} Ark",
            state.eternal.step_string(),
            cal.day_name,
            cal.arc_name
        );
        let day_month = format!("D{}/M{}", cal.day_of_month, cal.month_index);
        let step_percent = format!(
            "Beat:{}/{}({}%) Step:{}/{} Kai(Today):{}",
            state.eternal.beat_index,
            GRID_BEATS_PER_DAY,
            state.eternal.percent_into_beat,
            state.eternal.step_index,
            GRID_STEPS_PER_BEAT,
            state.eternal_pulses_into_day
        );
        let year_spiral = format!("Y{} PS{}", cal.year_index, state.spiral_level);
        let solar = format!(
            "Solar Kairos (UTC-aligned): {} {} D{}/M{}, {} Ark  {}",
            state.solar.grid.step_string(),
            sol.day_name,
            sol.day_of_month,
            sol.month_index,
            sol.arc_name,
            beat_step(&state.solar.grid)
        );
        let eternal = [
            kairos.as_str(),
            day_month.as_str(),
            step_percent.as_str(),
            year_spiral.as_str(),
            solar.as_str(),
            &format!("Eternal Pulse:{}", state.elapsed_pulses),
        ]
        .join(SEPARATOR);

        Self {
            kairos,
            day_month,
            step_percent,
            year_spiral,
            solar,
            eternal,
        }
    }
}

fn beat_step(grid: &GridCoordinate) -> String {
    format!(
        "Beat:{}/{} Step:{}/{}",
        grid.beat_index, GRID_BEATS_PER_DAY, grid.step_index, GRID_STEPS_PER_BEAT
    )
}
