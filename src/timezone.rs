//! Conversion between local wall-clock timestamps and stored UTC instants.
//!
//! Classes are submitted and displayed in a single configured zone while the
//! store only ever sees UTC. Ambiguous local times (a DST fold) resolve to the
//! earlier instant; local times skipped by a DST gap are rejected.

use chrono::{DateTime, MappedLocalTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("'{0}' is not an ISO-8601 local date-time")]
    Unparsable(String),
    #[error("{0} does not exist in {1}")]
    NonExistent(NaiveDateTime, Tz),
}

/// Parses an ISO-8601 timestamp without offset. A bare date means midnight.
pub fn parse_local(input: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = input.trim();
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| TimeError::Unparsable(input.to_string()))
}

pub fn to_reference(local: NaiveDateTime, zone: Tz) -> Result<DateTime<Utc>, TimeError> {
    match zone.from_local_datetime(&local) {
        MappedLocalTime::Single(dt) => Ok(dt.with_timezone(&Utc)),
        MappedLocalTime::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        MappedLocalTime::None => Err(TimeError::NonExistent(local, zone)),
    }
}

pub fn to_local(instant: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}

/// Renders a stored instant in `zone` with its offset, e.g. `2025-06-15T10:00:00+05:30`.
pub fn format_local(instant: DateTime<Utc>, zone: Tz) -> String {
    to_local(instant, zone)
        .fixed_offset()
        .to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
