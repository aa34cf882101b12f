// Wedding Countdown Core - Domain Logic & Ports
// NO infrastructure dependencies beyond the host clock

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{CancellationHandle, CountdownEngine, TickOptions};
pub use config::CountdownConfig;
pub use domain::{CountdownState, TargetInstant, TimeRemaining};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
