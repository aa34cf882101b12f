// Domain Layer - Pure countdown values

pub mod error;
pub mod remaining;
pub mod target;

// Re-exports
pub use error::DomainError;
pub use remaining::{format_two_digits, CountdownState, TimeRemaining};
pub use target::{parse_instant, TargetInstant};

/// Shown by the display layer once the countdown has expired
pub const EXPIRED_BANNER: &str = "The Big Day is Here!";
