// Time Remaining Domain Model

use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Countdown lifecycle. The only transition is Counting -> Expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountdownState {
    Counting,
    Expired,
}

impl std::fmt::Display for CountdownState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountdownState::Counting => write!(f, "COUNTING"),
            CountdownState::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// Snapshot of the time left until the target
///
/// Produced fresh on every tick and never mutated afterwards. All unit fields
/// are unsigned, so the display layer never sees a negative value, and the
/// smaller units are always below their carry threshold (hours < 24, minutes
/// and seconds < 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    #[serde(rename = "totalMillisecondsRemaining")]
    pub total_millis_remaining: u64,
    pub is_expired: bool,
}

impl TimeRemaining {
    /// The target has been reached
    pub const fn expired() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            total_millis_remaining: 0,
            is_expired: true,
        }
    }

    /// Fallback shown when an instant could not be interpreted
    pub const fn zeroed() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            total_millis_remaining: 0,
            is_expired: false,
        }
    }

    /// Break a signed millisecond difference (target - now) into units
    ///
    /// Non-positive differences are expired. Positive ones are split with
    /// truncating division, the remainder of each unit carried down to the
    /// next smaller one; the sub-second tail is dropped from the unit fields
    /// but kept in `total_millis_remaining`.
    pub fn from_millis(difference_ms: i64) -> Self {
        if difference_ms <= 0 {
            return Self::expired();
        }

        let total = difference_ms.unsigned_abs();
        let days = total / MILLIS_PER_DAY;
        let hours = (total % MILLIS_PER_DAY) / MILLIS_PER_HOUR;
        let minutes = (total % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let seconds = (total % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;

        Self {
            days,
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            total_millis_remaining: total,
            is_expired: false,
        }
    }

    pub fn state(&self) -> CountdownState {
        if self.is_expired {
            CountdownState::Expired
        } else {
            CountdownState::Counting
        }
    }

    /// Whole seconds covered by the unit fields
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// Field-wise comparison of everything a display can show
    ///
    /// `total_millis_remaining` is excluded; it moves on every tick even when
    /// no visible unit does.
    pub fn same_breakdown(&self, other: &Self) -> bool {
        self.days == other.days
            && self.hours == other.hours
            && self.minutes == other.minutes
            && self.seconds == other.seconds
            && self.is_expired == other.is_expired
    }
}

impl std::fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_expired {
            return write!(f, "expired");
        }
        write!(
            f,
            "{}d {}:{}:{}",
            self.days,
            format_two_digits(self.hours.into()),
            format_two_digits(self.minutes.into()),
            format_two_digits(self.seconds.into())
        )
    }
}

/// Zero-pad a counter to at least two digits
pub fn format_two_digits(value: u64) -> String {
    format!("{value:02}")
}
