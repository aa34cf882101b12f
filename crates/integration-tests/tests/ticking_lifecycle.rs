//! Ticking Lifecycle - config -> engine -> tick loop on a paused clock
//!
//! Drives the loop through counting, expiry and teardown the way a display
//! layer would

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;
use tokio_test::assert_ok;
use wedding_countdown_core::port::{FixedTimeProvider, MonotonicTimeProvider};
use wedding_countdown_core::{CountdownConfig, CountdownEngine, CountdownState, TimeRemaining};

type Seen = Arc<Mutex<Vec<TimeRemaining>>>;

fn sink(seen: &Seen) -> impl FnMut(TimeRemaining) + Send + 'static {
    let seen = Arc::clone(seen);
    move |r: TimeRemaining| seen.lock().unwrap().push(r)
}

fn config(pairs: &[(&str, &str)]) -> CountdownConfig {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_ok!(CountdownConfig::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }))
}

/// Full run: configured target, counting, expiry, loop exits on its own
#[tokio::test(start_paused = true)]
async fn test_configured_run_to_expiry() {
    let config = config(&[
        ("COUNTDOWN_TARGET", "2025-12-10T16:00:00+08:00"),
        ("COUNTDOWN_TICK_MS", "500"),
        ("COUNTDOWN_STOP_ON_EXPIRY", "true"),
    ]);
    let clock = Arc::new(MonotonicTimeProvider::anchored_at(
        config.target.timestamp_millis() - 3_000,
    ));
    let engine = Arc::new(CountdownEngine::new(config.target, clock));
    let seen = Seen::default();

    let mut handle = assert_ok!(engine.start_ticking_with(config.tick_options(), sink(&seen)));
    handle.finished().await;

    let seen = seen.lock().unwrap();
    let seconds: Vec<u32> = seen.iter().map(|r| r.seconds).collect();
    // Firings every 500ms, one emission per visible second
    assert_eq!(seconds, vec![3, 2, 1, 0, 0]);
    assert!(!seen[3].is_expired);
    assert!(seen[4].is_expired);
    assert_eq!(engine.state(), CountdownState::Expired);
    println!("✅ configured run reached expiry after {} emissions", seen.len());
}

/// De-duplication: firings inside the same second never re-emit
#[tokio::test(start_paused = true)]
async fn test_sub_second_firings_are_suppressed() {
    let config = CountdownConfig::default();
    let clock = Arc::new(MonotonicTimeProvider::anchored_at(
        config.target.timestamp_millis() - 5_000,
    ));
    let engine = Arc::new(CountdownEngine::new(config.target, clock));
    let seen = Seen::default();

    let _handle = assert_ok!(engine.start_ticking(Duration::from_millis(100), sink(&seen)));
    sleep(Duration::from_millis(950)).await;

    // Ten firings; all but the first read between 4.1s and 4.9s
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!((seen[0].seconds, seen[1].seconds), (5, 4));
}

/// Cancellation: no emissions after cancel while the clock keeps moving
#[tokio::test(start_paused = true)]
async fn test_cancel_then_advance() {
    let config = CountdownConfig::default();
    let clock = Arc::new(MonotonicTimeProvider::anchored_at(
        config.target.timestamp_millis() - 86_400_000,
    ));
    let engine = Arc::new(CountdownEngine::new(config.target, clock));
    let seen = Seen::default();

    let handle = assert_ok!(engine.start_ticking(config.tick_interval, sink(&seen)));
    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(seen.lock().unwrap().len(), 3);

    handle.cancel();
    handle.cancel();
    sleep(Duration::from_secs(30)).await;

    assert_eq!(seen.lock().unwrap().len(), 3);
    assert!(handle.is_finished());
    assert_eq!(engine.state(), CountdownState::Counting);
}

/// Scoped release: the owner going away stops the loop
#[tokio::test(start_paused = true)]
async fn test_owner_scope_releases_timer() {
    let config = CountdownConfig::default();
    let clock = Arc::new(MonotonicTimeProvider::anchored_at(
        config.target.timestamp_millis() - 86_400_000,
    ));
    let engine = Arc::new(CountdownEngine::new(config.target, clock));
    let seen = Seen::default();

    {
        let _handle = assert_ok!(engine.start_ticking(config.tick_interval, sink(&seen)));
        sleep(Duration::from_millis(1_500)).await;
    }
    sleep(Duration::from_secs(10)).await;

    assert_eq!(seen.lock().unwrap().len(), 2);
}

/// Clock stepped backwards after expiry never resumes counting
#[tokio::test(start_paused = true)]
async fn test_clock_step_back_after_expiry() {
    let config = CountdownConfig::default();
    let target_ms = config.target.timestamp_millis();
    let clock = Arc::new(FixedTimeProvider::new(target_ms - 3_000));
    let engine = Arc::new(CountdownEngine::new(config.target, clock.clone()));
    let seen = Seen::default();

    let _handle = assert_ok!(engine.start_ticking(Duration::from_secs(1), sink(&seen)));
    sleep(Duration::from_millis(500)).await;

    clock.set(target_ms);
    sleep(Duration::from_secs(1)).await;

    clock.set(target_ms - 60_000);
    sleep(Duration::from_secs(3)).await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].seconds, 3);
    assert_eq!(seen[1], TimeRemaining::expired());
}
