// Time Provider Port (for testability)

use std::sync::atomic::{AtomicI64, Ordering};

/// Host clock as seen by the countdown (allows mocking in tests)
pub trait TimeProvider: Send + Sync {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> i64;
}

/// System wall clock (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock pinned to a caller-chosen instant
///
/// Used for one-shot queries at a given "now" and in tests; `set` and
/// `advance` move it by hand.
pub struct FixedTimeProvider {
    now: AtomicI64,
}

impl FixedTimeProvider {
    pub fn new(now_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(now_millis),
        }
    }

    pub fn set(&self, now_millis: i64) {
        self.now.store(now_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_millis: i64) {
        self.now.fetch_add(delta_millis, Ordering::SeqCst);
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Wall-clock anchor advanced by tokio's monotonic clock
///
/// Immune to wall-clock steps after the anchor is taken. Under a paused tokio
/// runtime it only moves with `tokio::time::advance` or auto-advance, which
/// makes tick loops fully deterministic in tests.
pub struct MonotonicTimeProvider {
    anchor_millis: i64,
    started: tokio::time::Instant,
}

impl MonotonicTimeProvider {
    /// Anchor at the current wall-clock time
    pub fn anchored_now() -> Self {
        Self::anchored_at(chrono::Utc::now().timestamp_millis())
    }

    pub fn anchored_at(anchor_millis: i64) -> Self {
        Self {
            anchor_millis,
            started: tokio::time::Instant::now(),
        }
    }
}

impl TimeProvider for MonotonicTimeProvider {
    fn now_millis(&self) -> i64 {
        let elapsed = i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.anchor_millis.saturating_add(elapsed)
    }
}
