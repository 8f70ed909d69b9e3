//! `HarmonicClock`: one instant in, the full harmonic state out.
//!
//! `compute` is a pure function of `(instant, ClockConfig)`. Nothing is
//! cached between calls; two calls with the same instant produce equal
//! states.

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use num_rational::BigRational;
use serde::Serialize;

use crate::calendar::{CalendarCoordinate, CalendarProgress, cyclic};
use crate::config::ClockConfig;
use crate::constants::{
    ARC_BEAT_PULSES, CHAKRA_LOOP_PULSES, DAYS_SCALE, KAI_TURAH_PHRASES, MICRO_CYCLE_PULSES,
};
use crate::error::Result;
use crate::fixed::Fixed;
use crate::grid::GridCoordinate;
use crate::pulse::{anchored_day, calendar_day_pulses, elapsed_pulses, rem_floor, saturating_i64};
use crate::spiral::{EpochRecord, epoch_table, spiral_level};
use crate::subdivision::{Subdivision, subdivision_table};
use crate::time::{now_utc, parse_instant};

/// Position within the sunrise-anchored day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarDay {
    /// Whole solar days since the sunrise anchor; negative before it.
    pub day_index: i64,
    pub pulses_into_day: i64,
    pub grid: GridCoordinate,
}

/// A short repeating cycle measured in eternal pulses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicCycle {
    pub name: &'static str,
    pub pulse_in_cycle: Fixed,
    pub cycle_length: Fixed,
    pub percent: Fixed,
}

impl HarmonicCycle {
    fn measure(name: &'static str, elapsed: &BigRational, length: BigRational) -> Self {
        let pos = rem_floor(elapsed, &length);
        Self {
            name,
            pulse_in_cycle: Fixed::floor_rational(&pos, DAYS_SCALE),
            cycle_length: Fixed::floor_rational(&length, DAYS_SCALE),
            percent: Fixed::percent(&pos, &length),
        }
    }
}

/// Everything the clock knows about one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockState {
    pub instant: DateTime<Utc>,
    /// Whole pulses since genesis, floored toward −∞.
    pub elapsed_pulses: i64,
    /// Whole pulses into the current calendar day.
    pub eternal_pulses_into_day: i64,
    pub eternal: GridCoordinate,
    pub solar: SolarDay,
    pub calendar: CalendarCoordinate,
    pub solar_calendar: CalendarCoordinate,
    pub progress: CalendarProgress,
    pub cycles: Vec<HarmonicCycle>,
    pub spiral_level: u32,
    pub year_name: String,
    pub kai_turah_phrase: &'static str,
    pub epochs: Vec<EpochRecord>,
    pub subdivisions: Vec<Subdivision>,
}

impl ClockState {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The clock. Holds only its configuration, so it is cheap to clone and
/// safe to share across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HarmonicClock {
    config: ClockConfig,
}

impl HarmonicClock {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Full state at `instant`. Total over every representable instant.
    pub fn compute(&self, instant: DateTime<Utc>) -> ClockState {
        let ep = elapsed_pulses(&self.config.genesis, &instant);
        let ep_r = BigRational::from_integer(ep.clone());
        let day = calendar_day_pulses();

        // Eternal day: position inside the current φ-calendar day
        let into_day = rem_floor(&ep_r, &day);
        let calendar = CalendarCoordinate::from_elapsed_pulses(&ep);

        // Solar day: same lengths, sunrise-anchored
        let sun = anchored_day(&self.config.sunrise, &instant);
        let solar_index = saturating_i64(&sun.day_index);
        let solar_into_day = BigRational::from_integer(sun.pulses_into_day.clone());

        ClockState {
            instant,
            elapsed_pulses: saturating_i64(&ep),
            eternal_pulses_into_day: saturating_i64(&into_day.floor().to_integer()),
            eternal: GridCoordinate::from_calendar_position(&into_day),
            solar: SolarDay {
                day_index: solar_index,
                pulses_into_day: saturating_i64(&sun.pulses_into_day),
                grid: GridCoordinate::from_calendar_position(&solar_into_day),
            },
            solar_calendar: CalendarCoordinate::from_day_count(solar_index, &solar_into_day),
            progress: CalendarProgress::from_elapsed_pulses(&ep),
            cycles: vec![
                HarmonicCycle::measure("arcBeat", &ep_r, pulses(ARC_BEAT_PULSES)),
                HarmonicCycle::measure("microCycle", &ep_r, pulses(MICRO_CYCLE_PULSES)),
                HarmonicCycle::measure("chakraLoop", &ep_r, pulses(CHAKRA_LOOP_PULSES)),
                HarmonicCycle::measure("harmonicDay", &ep_r, day),
            ],
            spiral_level: spiral_level(&ep),
            year_name: year_name(calendar.year_index),
            kai_turah_phrase: cyclic(&KAI_TURAH_PHRASES, calendar.year_index),
            epochs: epoch_table(&ep),
            subdivisions: subdivision_table(&ep),
            calendar,
        }
    }

    /// Parse an optional override and compute; `None` means now.
    pub fn compute_at(&self, override_time: Option<&str>) -> Result<ClockState> {
        let instant = match override_time {
            Some(raw) => parse_instant(raw, self.config.naive_input)?,
            None => now_utc(),
        };
        Ok(self.compute(instant))
    }
}

fn pulses(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Display name of a calendar year.
pub fn year_name(year_index: i64) -> String {
    match year_index {
        0 => "Year of Eternal Restoration".to_string(),
        1 => "Year of Harmonic Embodiment".to_string(),
        y => format!("Year {}", y + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::canonical_genesis;
    use crate::error::ParseError;
    use crate::time::NaivePolicy;

    fn clock() -> HarmonicClock {
        HarmonicClock::default()
    }

    #[test]
    fn test_genesis_state() {
        let s = clock().compute(canonical_genesis());
        assert_eq!(s.elapsed_pulses, 0);
        assert_eq!(s.eternal_pulses_into_day, 0);
        assert_eq!(s.eternal.beat_index, 0);
        assert_eq!(s.eternal.step_index, 0);
        assert_eq!(s.spiral_level, 0);
        assert_eq!(s.year_name, "Year of Eternal Restoration");
        assert_eq!(s.kai_turah_phrase, "Tor Lah Mek Ka");
        assert_eq!(s.epochs.len(), 8);
        assert_eq!(s.subdivisions.len(), 11);
    }

    #[test]
    fn test_genesis_solar_day() {
        let s = clock().compute(canonical_genesis());
        assert_eq!(s.solar.day_index, -1);
        assert_eq!(s.solar.pulses_into_day, 2545);
        assert_eq!(s.solar.grid.step_string(), "5:10");
        assert_eq!(s.solar.grid.pulses_into_step, 5);
        assert_eq!((s.solar_calendar.day_of_month, s.solar_calendar.month_index), (42, 8));
        assert_eq!(s.solar_calendar.day_name, "Kaelith");
        assert_eq!(s.solar_calendar.arc_name, "Ignite");
    }

    #[test]
    fn test_cycles_at_genesis_are_zero() {
        let s = clock().compute(canonical_genesis());
        let names: Vec<&str> = s.cycles.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["arcBeat", "microCycle", "chakraLoop", "harmonicDay"]);
        assert!(s.cycles.iter().all(|c| c.pulse_in_cycle.is_zero() && c.percent.is_zero()));
        assert_eq!(s.cycles[3].cycle_length.to_string(), "17491.270421");
    }

    #[test]
    fn test_year_names() {
        assert_eq!(year_name(1), "Year of Harmonic Embodiment");
        assert_eq!(year_name(2), "Year 3");
        assert_eq!(year_name(-1), "Year 0");
    }

    #[test]
    fn test_compute_at_override() {
        let s = clock().compute_at(Some("2024-05-10T06:45:41.888Z")).unwrap();
        assert_eq!(s.elapsed_pulses, 0);
        let s = clock().compute_at(Some("2024-05-10T08:45:41.888+02:00")).unwrap();
        assert_eq!(s.elapsed_pulses, 0);
    }

    #[test]
    fn test_compute_at_rejects_garbage() {
        let err = clock().compute_at(Some("yesterday")).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_compute_at_honours_naive_policy() {
        let strict = HarmonicClock::new(ClockConfig {
            naive_input: NaivePolicy::Reject,
            ..ClockConfig::default()
        });
        let err = strict.compute_at(Some("2024-05-10T06:45:41.888")).unwrap_err();
        assert!(matches!(err, ParseError::MissingOffset { .. }));
        assert!(clock().compute_at(Some("2024-05-10T06:45:41.888")).is_ok());
    }

    #[test]
    fn test_compute_at_now() {
        let s = clock().compute_at(None).unwrap();
        assert!(s.elapsed_pulses > 0);
    }

    #[test]
    fn test_json_is_camel_case() {
        let s = clock().compute(canonical_genesis());
        let json: serde_json::Value = serde_json::from_str(&s.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["elapsedPulses"], 0);
        assert_eq!(json["instant"], "2024-05-10T06:45:41.888Z");
        assert_eq!(json["calendar"]["monthName"], "Aethon");
        assert_eq!(json["solar"]["grid"]["beatIndex"], 5);
        assert_eq!(json["epochs"][0]["thresholdPulses"], 5_877_066);
        assert_eq!(json["subdivisions"][0]["key"], "halfPulse");
    }
}
