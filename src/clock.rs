// src/clock.rs

// time source abstraction for the throttle window accounting

// dependencies
use std::time::{SystemTime, UNIX_EPOCH};

/// Clock trait used by the throttle to timestamp window openings.
/// Implementors must be thread-safe (Send + Sync).
/// `now` returns the current time in nanoseconds as a u64.
/// Swapping in a manually-driven clock makes the window logic fully
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<u64, ClockError>;
}

/// Clock error type
#[derive(Debug)]
pub enum ClockError {
    SystemTimeError,
}

/// Wall clock backed by the system time.
/// Reports nanoseconds since the Unix epoch and fails if the system
/// clock sits before the epoch.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<u64, ClockError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .map_err(|_| ClockError::SystemTimeError)
    }
}
