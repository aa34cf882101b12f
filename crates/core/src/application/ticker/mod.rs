// Ticker - periodic countdown refresh loop

mod cancellation;

pub use cancellation::CancellationHandle;

use super::constants::DEFAULT_TICK_INTERVAL;
use super::engine::CountdownEngine;
use crate::domain::TimeRemaining;
use crate::error::{AppError, Result};
use cancellation::cancellation_channel;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Tick loop settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOptions {
    /// Time between two firings
    pub interval: Duration,
    /// Exit the loop after emitting the expired state
    pub stop_on_expiry: bool,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_TICK_INTERVAL,
            stop_on_expiry: false,
        }
    }
}

/// Spawn the refresh loop for `engine` on the current tokio runtime
///
/// The first firing happens immediately and always emits. Later firings emit
/// only when the breakdown differs from the previous emission. Missed firings
/// (a stalled runtime) are skipped rather than replayed in a burst.
pub(crate) fn spawn_ticker<F>(
    engine: Arc<CountdownEngine>,
    options: TickOptions,
    mut on_change: F,
) -> Result<CancellationHandle>
where
    F: FnMut(TimeRemaining) + Send + 'static,
{
    if options.interval.is_zero() {
        return Err(AppError::Validation(
            "tick interval must be greater than zero".to_string(),
        ));
    }
    let runtime = Handle::try_current().map_err(|e| AppError::TimerUnavailable(e.to_string()))?;

    let (tx, mut cancel) = cancellation_channel();

    let task = runtime.spawn(async move {
        let interval_ms = options.interval.as_millis();
        info!(
            target_instant = %engine.target(),
            interval_ms = %interval_ms,
            stop_on_expiry = options.stop_on_expiry,
            "Countdown ticker started"
        );

        let mut tick = interval(options.interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last: Option<TimeRemaining> = None;

        loop {
            tokio::select! {
                biased;
                _ = cancel.wait() => break,
                _ = tick.tick() => {}
            }
            if cancel.is_cancelled() {
                break;
            }

            let remaining = engine.remaining();
            if last.is_some_and(|previous| previous.same_breakdown(&remaining)) {
                continue;
            }

            debug!(
                days = remaining.days,
                hours = remaining.hours,
                minutes = remaining.minutes,
                seconds = remaining.seconds,
                is_expired = remaining.is_expired,
                "Countdown changed"
            );
            on_change(remaining);
            last = Some(remaining);

            if remaining.is_expired && options.stop_on_expiry {
                info!("Countdown expired, stopping ticker");
                break;
            }
        }

        info!("Countdown ticker stopped");
    });

    Ok(CancellationHandle::new(tx, task))
}
