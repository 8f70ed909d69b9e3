//! φ-closure calendar: 6-day weeks, 42-day months, 8-month years.
//!
//! The eternal calendar is derived from whole elapsed pulses against
//! periods of 17,491.270421 pulses per day. The solar calendar counts whole
//! solar days since the sunrise anchor. Both share the same coordinate type
//! and agree whenever they are fed the same day count.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde::Serialize;

use crate::constants::{
    ARC_NAMES, ARCS_PER_DAY, DAY_NAMES, DAYS_PER_MONTH, DAYS_PER_WEEK, DAYS_PER_YEAR, DAYS_SCALE,
    MONTH_NAMES, MONTHS_PER_YEAR, WEEK_NAMES,
};
use crate::fixed::Fixed;
use crate::pulse::{calendar_day_pulses, rem_floor, saturating_i64};

/// Day, week, month, year and arc of one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCoordinate {
    /// Whole calendar days since the cycle origin; negative before it.
    pub day_count: i64,
    /// 1..=42
    pub day_of_month: u32,
    /// 1..=8
    pub month_index: u32,
    pub month_name: &'static str,
    pub year_index: i64,
    /// 1..=7
    pub week_index: u32,
    pub week_name: &'static str,
    /// 0..6, position of the day name in the 6-day week.
    pub day_name_index: u32,
    pub day_name: &'static str,
    /// 0..=5
    pub arc_index: u32,
    pub arc_name: &'static str,
}

impl CalendarCoordinate {
    /// Eternal calendar from whole pulses elapsed since genesis.
    pub fn from_elapsed_pulses(elapsed: &BigInt) -> Self {
        let ep = BigRational::from_integer(elapsed.clone());
        let day = calendar_day_pulses();
        let month = month_pulses();
        let year = year_pulses();

        let day_count = floor_div(&ep, &day);
        let into_day = rem_floor(&ep, &day);
        let month_raw = floor_div(&ep, &month);
        let year_index = floor_div(&ep, &year);
        let into_month = rem_floor(&ep, &month);
        let days_into_month = floor_div(&into_month, &day);

        Self::assemble(day_count, month_raw, year_index, days_into_month, &into_day)
    }

    /// Calendar from a whole day count and a pulse position inside that day.
    pub fn from_day_count(day_count: i64, pulses_into_day: &BigRational) -> Self {
        let month_raw = day_count.div_euclid(DAYS_PER_MONTH);
        let year_index = day_count.div_euclid(DAYS_PER_YEAR);
        let days_into_month = day_count.rem_euclid(DAYS_PER_MONTH);
        Self::assemble(day_count, month_raw, year_index, days_into_month, pulses_into_day)
    }

    fn assemble(
        day_count: i64,
        month_raw: i64,
        year_index: i64,
        days_into_month: i64,
        into_day: &BigRational,
    ) -> Self {
        let month_slot = month_raw.rem_euclid(MONTHS_PER_YEAR);
        let week_slot = days_into_month / DAYS_PER_WEEK;
        let day_slot = day_count.rem_euclid(DAYS_PER_WEEK);
        let arc_slot = arc_index(into_day);

        Self {
            day_count,
            day_of_month: (days_into_month + 1) as u32,
            month_index: (month_slot + 1) as u32,
            month_name: cyclic(&MONTH_NAMES, month_slot),
            year_index,
            week_index: (week_slot + 1) as u32,
            week_name: cyclic(&WEEK_NAMES, week_slot),
            day_name_index: day_slot as u32,
            day_name: cyclic(&DAY_NAMES, day_slot),
            arc_index: arc_slot as u32,
            arc_name: cyclic(&ARC_NAMES, arc_slot),
        }
    }
}

/// Progress through one calendar period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodProgress {
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub percent: Fixed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekProgress {
    /// 0..6
    pub weekday_index: u32,
    pub weekday_name: &'static str,
    pub pulses_into_week: Fixed,
    pub percent: Fixed,
}

/// Week, month and year progress of the eternal calendar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarProgress {
    pub week: WeekProgress,
    pub month: PeriodProgress,
    pub year: PeriodProgress,
}

impl CalendarProgress {
    pub fn from_elapsed_pulses(elapsed: &BigInt) -> Self {
        let ep = BigRational::from_integer(elapsed.clone());
        let day = calendar_day_pulses();
        let week = week_pulses();
        let month = month_pulses();
        let year = year_pulses();

        let into_week = rem_floor(&ep, &week);
        let weekday = floor_div(&into_week, &day);

        let into_month = rem_floor(&ep, &month);
        let month_days = floor_div(&into_month, &day);
        let partial_day = !rem_floor(&into_month, &day).is_zero();
        let month_remaining = (DAYS_PER_MONTH - month_days - i64::from(partial_day)).max(0);

        let into_year = rem_floor(&ep, &year);
        let year_days = floor_div(&ep, &day).rem_euclid(DAYS_PER_YEAR);

        Self {
            week: WeekProgress {
                weekday_index: weekday as u32,
                weekday_name: cyclic(&DAY_NAMES, weekday),
                pulses_into_week: Fixed::floor_rational(&into_week, DAYS_SCALE),
                percent: Fixed::percent(&into_week, &week),
            },
            month: PeriodProgress {
                days_elapsed: month_days,
                days_remaining: month_remaining,
                percent: Fixed::percent(&into_month, &month),
            },
            year: PeriodProgress {
                days_elapsed: year_days,
                days_remaining: DAYS_PER_YEAR - year_days,
                percent: Fixed::percent(&into_year, &year),
            },
        }
    }
}

pub fn week_pulses() -> BigRational {
    calendar_day_pulses() * BigRational::from_integer(BigInt::from(DAYS_PER_WEEK))
}

pub fn month_pulses() -> BigRational {
    calendar_day_pulses() * BigRational::from_integer(BigInt::from(DAYS_PER_MONTH))
}

/// 336 calendar days = 5,877,066.861456 pulses.
pub fn year_pulses() -> BigRational {
    calendar_day_pulses() * BigRational::from_integer(BigInt::from(DAYS_PER_YEAR))
}

/// Arc of the day, floor(position / (day / 6)) clamped to 0..=5.
pub fn arc_index(pulses_into_day: &BigRational) -> i64 {
    let arc = calendar_day_pulses() / BigRational::from_integer(BigInt::from(ARCS_PER_DAY));
    floor_div(pulses_into_day, &arc).clamp(0, ARCS_PER_DAY - 1)
}

/// Name table lookup with non-negative wraparound.
pub fn cyclic(table: &[&'static str], index: i64) -> &'static str {
    table[index.rem_euclid(table.len() as i64) as usize]
}

fn floor_div(x: &BigRational, period: &BigRational) -> i64 {
    saturating_i64(&(x / period).floor().to_integer())
}
