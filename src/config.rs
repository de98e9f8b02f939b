// src/config.rs

//! Configuration types for the throttle

// dependencies
use std::time::Duration;

use crate::errors::ThrottleError;

/// What to do with a call that arrives while a deferred invocation is
/// already waiting for the current window to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingPolicy {
    /// Keep the arguments of the call that was deferred first; later
    /// calls inside the same window are dropped.
    #[default]
    KeepFirst,
    /// Overwrite the pending arguments with those of the newest call.
    /// Still at most one deferred invocation per window.
    ReplaceLatest,
}

/// Configuration for throttle behavior
#[derive(Debug, Clone)]
pub struct ThrottleConfig {
    pub(crate) window: Duration,
    pub(crate) policy: PendingPolicy,
}

impl ThrottleConfig {
    /// Create a new configuration with the given window duration
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            policy: PendingPolicy::default(),
        }
    }

    /// Builder-style: set the window duration
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Builder-style: set the pending-call policy
    pub fn policy(mut self, policy: PendingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ThrottleError> {
        if self.window.as_nanos() > u64::MAX as u128 {
            return Err(ThrottleError::WindowTooLarge);
        }
        Ok(())
    }
}
