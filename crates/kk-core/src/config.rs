use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{GENESIS_SUBSEC_NANOS, GENESIS_UNIX_SECS, SUNRISE_UNIX_SECS};
use crate::time::NaivePolicy;

/// Anchors and input policy for a [`HarmonicClock`](crate::HarmonicClock).
///
/// Loaded once at startup and never mutated. Every field falls back to the
/// canonical value when absent from a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Zero point of the eternal pulse count.
    pub genesis: DateTime<Utc>,
    /// Zero point of the solar-aligned day.
    pub sunrise: DateTime<Utc>,
    pub naive_input: NaivePolicy,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            genesis: canonical_genesis(),
            sunrise: canonical_sunrise(),
            naive_input: NaivePolicy::default(),
        }
    }
}

/// 2024-05-10T06:45:41.888Z
pub fn canonical_genesis() -> DateTime<Utc> {
    Utc.timestamp_opt(GENESIS_UNIX_SECS, GENESIS_SUBSEC_NANOS)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// 2024-05-11T04:30:00Z
pub fn canonical_sunrise() -> DateTime<Utc> {
    Utc.timestamp_opt(SUNRISE_UNIX_SECS, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
