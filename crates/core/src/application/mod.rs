// Application Layer - Countdown use cases

pub mod constants;
pub mod countdown;
pub mod engine;
pub mod ticker;

// Re-exports
pub use countdown::{compute, compute_at_millis, compute_from_str, try_compute};
pub use engine::CountdownEngine;
pub use ticker::{CancellationHandle, TickOptions};
