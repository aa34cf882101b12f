// Target Instant Domain Model

use super::error::{DomainError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Naive layouts accepted only to tell "missing offset" apart from garbage
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an RFC 3339 instant that carries an explicit UTC offset
///
/// Offset-less timestamps are rejected with `MissingOffset`; the offset is never
/// guessed from the host timezone.
pub fn parse_instant(input: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = input.trim();
    DateTime::parse_from_rfc3339(trimmed).map_err(|e| {
        let naive = NAIVE_LAYOUTS
            .iter()
            .any(|layout| NaiveDateTime::parse_from_str(trimmed, layout).is_ok());
        if naive {
            DomainError::MissingOffset(trimmed.to_string())
        } else {
            DomainError::InvalidInstant(format!("{trimmed:?}: {e}"))
        }
    })
}

/// Fixed point in time the countdown runs toward
///
/// Immutable once built. The UTC offset is part of the value, so display
/// helpers can render the instant in the venue's local time while all
/// arithmetic happens on the UTC timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetInstant(DateTime<FixedOffset>);

impl TargetInstant {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    /// Build from a wall-clock reading at the venue and the venue's offset
    pub fn from_local(local: NaiveDateTime, offset_secs: i32) -> Result<Self> {
        let offset =
            FixedOffset::east_opt(offset_secs).ok_or(DomainError::InvalidOffset(offset_secs))?;
        offset
            .from_local_datetime(&local)
            .single()
            .map(Self)
            .ok_or_else(|| DomainError::InvalidInstant(format!("{local} at offset {offset}")))
    }

    pub fn parse(input: &str) -> Result<Self> {
        parse_instant(input).map(Self)
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Re-express any instant in the target's own offset
    pub fn to_target_zone<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<FixedOffset> {
        instant.with_timezone(self.0.offset())
    }

    pub fn is_in_future<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.utc() > now.with_timezone(&Utc)
    }

    /// Long-form date at the venue, e.g. "December 10, 2025"
    pub fn display_date(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl std::fmt::Display for TargetInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl FromStr for TargetInstant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<DateTime<FixedOffset>> for TargetInstant {
    fn from(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }
}
