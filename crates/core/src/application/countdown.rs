// Countdown Computation - remaining time between two absolute instants

use crate::domain::{parse_instant, DomainError, TargetInstant, TimeRemaining};
use chrono::{DateTime, TimeZone, Utc};
use tracing::warn;

/// Remaining time from `now` until `target`
///
/// Both instants are moved onto the UTC timeline before subtracting, so the
/// offsets they carry never leak into the difference.
pub fn compute<Tz: TimeZone>(target: &TargetInstant, now: &DateTime<Tz>) -> TimeRemaining {
    let difference = target
        .utc()
        .signed_duration_since(now.with_timezone(&Utc));
    TimeRemaining::from_millis(difference.num_milliseconds())
}

/// Checked compute over a raw epoch-millisecond reading
pub fn try_compute(target: &TargetInstant, now_millis: i64) -> Result<TimeRemaining, DomainError> {
    let now = DateTime::<Utc>::from_timestamp_millis(now_millis).ok_or_else(|| {
        DomainError::InvalidInstant(format!("{now_millis} ms since epoch is out of range"))
    })?;
    Ok(compute(target, &now))
}

/// Soft-failing compute: an unreadable clock yields a zeroed, non-expired value
pub fn compute_at_millis(target: &TargetInstant, now_millis: i64) -> TimeRemaining {
    try_compute(target, now_millis).unwrap_or_else(|e| {
        warn!(error = %e, now_millis, "Countdown compute failed, falling back to zeros");
        TimeRemaining::zeroed()
    })
}

/// Soft-failing compute over two RFC 3339 strings with explicit offsets
pub fn compute_from_str(target: &str, now: &str) -> TimeRemaining {
    let parsed = parse_instant(target)
        .map(TargetInstant::new)
        .and_then(|target| parse_instant(now).map(|now| (target, now)));

    match parsed {
        Ok((target, now)) => compute(&target, &now),
        Err(e) => {
            warn!(error = %e, "Countdown compute failed, falling back to zeros");
            TimeRemaining::zeroed()
        }
    }
}
