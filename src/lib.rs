// src/lib.rs

//! # Utilbelt
//!
//! Small collection and function utilities, plus a window-based throttle
//! that runs a wrapped operation at most once per window.
//!
//! ## Quick Example
//!
//! ```rust
//! use utilbelt::{Throttle, ThrottleConfig, SystemClock};
//! use std::time::Duration;
//!
//! let config = ThrottleConfig::new(Duration::from_millis(100));
//! let throttle = Throttle::with_config(|x: u64| x + 1, config, SystemClock).unwrap();
//!
//! // first call runs immediately
//! assert_eq!(throttle.call(1).unwrap(), 2);
//! // a call inside the window gets the last recorded result
//! assert_eq!(throttle.call(5).unwrap(), 2);
//! ```

// private modules
mod clock;
mod config;
mod errors;
mod functions;
mod throttle;
mod timer;

// public modules
pub mod collections;

// public API exports
pub use clock::{Clock, ClockError, SystemClock};
pub use config::{PendingPolicy, ThrottleConfig};
pub use errors::ThrottleError;
pub use functions::{Memoized, Once, delay};
pub use throttle::Throttle;
pub use timer::{TimerHandle, schedule};
