//! Terminal rendering of countdown snapshots

use wedding_countdown_core::domain::{format_two_digits, EXPIRED_BANNER};
use wedding_countdown_core::{TargetInstant, TimeRemaining};

/// Return to column 0 and clear the line
const REWIND: &str = "\r\x1b[2K";

/// One frame of the live countdown
///
/// Counting frames overwrite the current line; the expired frame ends it.
pub fn render_frame(remaining: &TimeRemaining, target: &TargetInstant) -> String {
    if remaining.is_expired {
        return format!("{REWIND}{EXPIRED_BANNER} ({})\n", target.display_date());
    }

    format!(
        "{REWIND}{} {} {}:{}:{} until {}",
        remaining.days,
        if remaining.days == 1 { "day" } else { "days" },
        format_two_digits(remaining.hours.into()),
        format_two_digits(remaining.minutes.into()),
        format_two_digits(remaining.seconds.into()),
        target.display_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedding() -> TargetInstant {
        TargetInstant::parse("2025-12-10T16:00:00+08:00").unwrap()
    }

    #[test]
    fn test_counting_frame_is_zero_padded() {
        let remaining =
            TimeRemaining::from_millis(2 * 86_400_000 + 3 * 3_600_000 + 4 * 60_000 + 5_000);
        assert_eq!(
            render_frame(&remaining, &wedding()),
            "\r\x1b[2K2 days 03:04:05 until December 10, 2025"
        );
    }

    #[test]
    fn test_single_day_label() {
        let remaining = TimeRemaining::from_millis(86_400_000);
        assert!(render_frame(&remaining, &wedding()).contains("1 day 00:00:00"));
    }

    #[test]
    fn test_expired_frame_shows_banner() {
        let frame = render_frame(&TimeRemaining::expired(), &wedding());
        assert!(frame.contains(EXPIRED_BANNER));
        assert!(frame.ends_with('\n'));
    }
}
