//! UTC instant parsing and formatting.
//!
//! Every instant the clock sees is a `DateTime<Utc>`. Input carrying an
//! offset is normalized to UTC; offset-less input is handled explicitly by
//! a [`NaivePolicy`] instead of silently picking a zone.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// What to do with a datetime that carries no UTC offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaivePolicy {
    /// Read the wall-clock value as UTC.
    #[default]
    #[serde(rename = "utc")]
    AssumeUtc,
    #[serde(rename = "reject")]
    Reject,
}

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Current UTC instant.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an ISO-8601 / RFC 3339 datetime into UTC.
pub fn parse_instant(input: &str, policy: NaivePolicy) -> Result<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseError::Malformed {
            input: input.to_string(),
            reason: "empty input".to_string(),
        });
    }

    let rfc_err = match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return match policy {
                NaivePolicy::AssumeUtc => Ok(naive.and_utc()),
                NaivePolicy::Reject => Err(ParseError::MissingOffset {
                    input: input.to_string(),
                }),
            };
        }
    }

    Err(ParseError::Malformed {
        input: input.to_string(),
        reason: rfc_err.to_string(),
    })
}

/// RFC 3339 UTC string with only as many fractional digits as needed.
pub fn to_iso8601(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
