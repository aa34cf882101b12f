// Countdown Configuration

use crate::application::constants::{
    DEFAULT_TARGET, DEFAULT_TICK_INTERVAL, ENV_STOP_ON_EXPIRY, ENV_TARGET, ENV_TICK_MS,
};
use crate::application::TickOptions;
use crate::domain::TargetInstant;
use crate::error::{AppError, Result};
use std::time::Duration;

/// Settings supplied by the hosting application at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfig {
    pub target: TargetInstant,
    pub tick_interval: Duration,
    pub stop_on_expiry: bool,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            stop_on_expiry: false,
        }
    }
}

impl CountdownConfig {
    /// Load from `COUNTDOWN_*` environment variables, defaulting what is unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TARGET) {
            config.target = TargetInstant::parse(&raw)
                .map_err(|e| AppError::Config(format!("{ENV_TARGET}: {e}")))?;
        }

        if let Some(raw) = lookup(ENV_TICK_MS) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{ENV_TICK_MS}={raw:?}: {e}")))?;
            if millis == 0 {
                return Err(AppError::Config(format!(
                    "{ENV_TICK_MS} must be greater than zero"
                )));
            }
            config.tick_interval = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(ENV_STOP_ON_EXPIRY) {
            config.stop_on_expiry = parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("{ENV_STOP_ON_EXPIRY}={raw:?}: expected a boolean"))
            })?;
        }

        Ok(config)
    }

    pub fn tick_options(&self) -> TickOptions {
        TickOptions {
            interval: self.tick_interval,
            stop_on_expiry: self.stop_on_expiry,
        }
    }
}

/// The wedding ceremony start
pub fn default_target() -> TargetInstant {
    // DEFAULT_TARGET is a literal covered by tests
    TargetInstant::parse(DEFAULT_TARGET)
        .unwrap_or_else(|e| unreachable!("{DEFAULT_TARGET}: {e}"))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
