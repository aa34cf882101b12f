//! Wedding Countdown - Main Entry Point
//! Live terminal countdown driven by the core tick loop

mod render;

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wedding_countdown_core::port::SystemTimeProvider;
use wedding_countdown_core::{CountdownConfig, CountdownEngine};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "wedding_countdown_core=info,wedding_countdown_daemon=info";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging (stderr, so the countdown line on stdout stays clean)
    init_logging()?;
    info!("Wedding Countdown v{} starting...", VERSION);

    // 2. Load configuration
    let config = CountdownConfig::from_env().context("Failed to load countdown configuration")?;
    info!(
        target_instant = %config.target,
        tick_ms = %config.tick_interval.as_millis(),
        stop_on_expiry = config.stop_on_expiry,
        "Configuration loaded"
    );

    // 3. Wire the engine to the host clock
    let engine = Arc::new(CountdownEngine::new(
        config.target,
        Arc::new(SystemTimeProvider),
    ));

    // 4. Start ticking; each effective change redraws the line
    let target = config.target;
    let mut handle = engine
        .start_ticking_with(config.tick_options(), move |remaining| {
            let mut stdout = std::io::stdout().lock();
            let _ = write!(stdout, "{}", render::render_frame(&remaining, &target));
            let _ = stdout.flush();
        })
        .context("Failed to start countdown ticker")?;

    // 5. Run until the big day (if configured) or Ctrl+C
    tokio::select! {
        _ = handle.finished(), if config.stop_on_expiry => {
            info!("Countdown complete");
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            println!();
            info!("Shutdown signal received. Exiting gracefully...");
        }
    }

    // 6. Release the timer
    handle.cancel();
    info!(state = %engine.state(), "Shutdown complete.");

    Ok(())
}

fn init_logging() -> Result<()> {
    let log_format =
        std::env::var("COUNTDOWN_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}
