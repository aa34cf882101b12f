// Countdown constants (no magic values)
use std::time::Duration;

/// Ceremony start, venue local time (UTC+8)
pub const DEFAULT_TARGET: &str = "2025-12-10T16:00:00+08:00";

/// Refresh cadence of the live countdown (1s)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Environment variable holding the RFC 3339 target instant
pub const ENV_TARGET: &str = "COUNTDOWN_TARGET";

/// Environment variable holding the tick interval in milliseconds
pub const ENV_TICK_MS: &str = "COUNTDOWN_TICK_MS";

/// Environment variable: stop the tick loop once the target is reached
pub const ENV_STOP_ON_EXPIRY: &str = "COUNTDOWN_STOP_ON_EXPIRY";
