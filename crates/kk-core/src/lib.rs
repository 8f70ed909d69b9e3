//! Kai-Klok harmonic clock engine.
//!
//! Converts a UTC instant into pulses of 3 + √5 seconds counted from a
//! genesis instant, then into nested cyclic coordinates: the exact
//! 36 × 44 × 11 beat/step lattice, the 17,491.270421-pulse φ-calendar day
//! with its weeks, months and years, and φ-spiral epochs. All arithmetic is
//! exact (Q(√5) and big rationals); nothing is approximated with floats.
//!
//! Zero I/O. The engine only reads the clock when asked to resolve "now".

pub mod calendar;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod fixed;
pub mod grid;
pub mod pulse;
pub mod seal;
pub mod spiral;
pub mod subdivision;
pub mod surd;
pub mod time;

pub use calendar::{CalendarCoordinate, CalendarProgress, PeriodProgress, WeekProgress};
pub use clock::{ClockState, HarmonicClock, HarmonicCycle, SolarDay};
pub use config::ClockConfig;
pub use error::{ParseError, Result};
pub use fixed::Fixed;
pub use grid::GridCoordinate;
pub use seal::Seals;
pub use spiral::{EpochRecord, epoch_table, level_threshold, spiral_level};
pub use subdivision::{Subdivision, subdivision_table};
pub use surd::Surd;
pub use time::{NaivePolicy, parse_instant, to_iso8601};
