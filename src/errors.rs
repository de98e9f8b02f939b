// src/errors.rs

// error handling for the throttle type

// dependencies
use std::error::Error;
use std::fmt;

use crate::clock::ClockError;

/// Error type for throttle configuration and clock issues.
#[non_exhaustive]
#[derive(Debug)]
pub enum ThrottleError {
    WindowTooLarge,    // window duration overflows nanosecond accounting
    Clock(ClockError), // error variant for issues with the underlying clock
}

// implement the Display trait for the ThrottleError type
impl fmt::Display for ThrottleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThrottleError::WindowTooLarge => {
                write!(f, "Window duration exceeds the supported range")
            }
            ThrottleError::Clock(_) => write!(f, "Clock error occurred"),
        }
    }
}

// implement the Error trait for the ThrottleError type
impl Error for ThrottleError {}

// allow `?` on clock reads inside the throttle
impl From<ClockError> for ThrottleError {
    fn from(err: ClockError) -> Self {
        ThrottleError::Clock(err)
    }
}
