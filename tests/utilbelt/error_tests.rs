// tests/utilbelt/error_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use std::time::Duration;
    use utilbelt::{Throttle, ThrottleConfig, ThrottleError};

    #[test]
    fn clock_error_propagates_in_call() {
        let clock = TestClock::new();
        let config = ThrottleConfig::new(Duration::from_millis(100));
        let throttle = Throttle::with_config(|x: u64| x + 1, config, clock.clone()).unwrap();

        // Make the clock fail on next call
        clock.fail_next_call();

        let result = throttle.call(1);
        assert!(result.is_err());

        // Verify it's specifically a clock error
        match result.unwrap_err() {
            ThrottleError::Clock(_) => {} // Expected
            other => panic!("Expected Clock error, got: {:?}", other),
        }
    }

    #[test]
    fn clock_recovery_after_failure() {
        let clock = TestClock::new();
        let config = ThrottleConfig::new(Duration::from_millis(100));
        let throttle = Throttle::with_config(|x: u64| x + 1, config, clock.clone()).unwrap();

        clock.fail_next_call();
        assert!(throttle.call(1).is_err());

        // Clock works again, and the failed call left no window open
        assert_eq!(throttle.call(1).unwrap(), 2);
    }

    #[test]
    fn failed_call_does_not_mutate_state() {
        let clock = TestClock::new();
        let config = ThrottleConfig::new(Duration::from_millis(100));
        let throttle = Throttle::with_config(|x: u64| x + 1, config, clock.clone()).unwrap();

        assert_eq!(throttle.call(1).unwrap(), 2);

        clock.advance_millis(10);
        clock.fail_next_call();
        assert!(throttle.call(5).is_err());

        // the window opened by the first call is still in effect
        assert_eq!(throttle.call(9).unwrap(), 2);
    }

    #[test]
    fn error_display_formatting() {
        let clock = TestClock::new();
        let config = ThrottleConfig::new(Duration::from_millis(100));
        let throttle = Throttle::with_config(|x: u64| x + 1, config, clock.clone()).unwrap();

        clock.fail_next_call();
        let result = throttle.call(1);

        match result {
            Err(e) => {
                let error_string = format!("{}", e);
                assert!(!error_string.is_empty());
                assert!(
                    error_string.to_lowercase().contains("clock")
                        || error_string.to_lowercase().contains("time")
                );
            }
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn oversized_window_error_displays() {
        let config = ThrottleConfig::new(Duration::from_secs(u64::MAX));
        let error = config.validate().unwrap_err();
        assert!(format!("{}", error).to_lowercase().contains("window"));
    }
}
