// Countdown Engine - clock sampling and the Counting -> Expired latch

use super::countdown::compute_at_millis;
use super::ticker::{spawn_ticker, CancellationHandle, TickOptions};
use crate::domain::{CountdownState, TargetInstant, TimeRemaining};
use crate::error::Result;
use crate::port::TimeProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Countdown toward one fixed target
///
/// The target never changes for the lifetime of an engine; counting down to a
/// different instant means building a new engine. Once a computation reports
/// expiry the engine stays expired, even if the host clock is later stepped
/// backwards.
pub struct CountdownEngine {
    target: TargetInstant,
    time_provider: Arc<dyn TimeProvider>,
    expired: AtomicBool,
}

impl CountdownEngine {
    pub fn new(target: TargetInstant, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            target,
            time_provider,
            expired: AtomicBool::new(false),
        }
    }

    pub fn target(&self) -> &TargetInstant {
        &self.target
    }

    pub fn state(&self) -> CountdownState {
        if self.expired.load(Ordering::Acquire) {
            CountdownState::Expired
        } else {
            CountdownState::Counting
        }
    }

    /// Sample the clock and compute the remaining time
    pub fn remaining(&self) -> TimeRemaining {
        if self.expired.load(Ordering::Acquire) {
            return TimeRemaining::expired();
        }

        let now = self.time_provider.now_millis();
        let remaining = compute_at_millis(&self.target, now);

        if remaining.is_expired && !self.expired.swap(true, Ordering::AcqRel) {
            info!(
                target_instant = %self.target,
                now_millis = now,
                "Countdown reached its target"
            );
        }
        remaining
    }

    /// Refresh every `interval`, calling `on_change` on each effective change
    ///
    /// Shorthand for [`start_ticking_with`](Self::start_ticking_with) with the
    /// loop kept alive after expiry.
    pub fn start_ticking<F>(
        self: &Arc<Self>,
        interval: std::time::Duration,
        on_change: F,
    ) -> Result<CancellationHandle>
    where
        F: FnMut(TimeRemaining) + Send + 'static,
    {
        self.start_ticking_with(
            TickOptions {
                interval,
                ..TickOptions::default()
            },
            on_change,
        )
    }

    /// Start the refresh loop on the current tokio runtime
    ///
    /// # Errors
    /// * `AppError::TimerUnavailable` - called outside a tokio runtime
    /// * `AppError::Validation` - zero interval
    pub fn start_ticking_with<F>(
        self: &Arc<Self>,
        options: TickOptions,
        on_change: F,
    ) -> Result<CancellationHandle>
    where
        F: FnMut(TimeRemaining) + Send + 'static,
    {
        spawn_ticker(Arc::clone(self), options, on_change)
    }
}
