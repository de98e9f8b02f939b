// tests/utilbelt/functions_tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use utilbelt::{Memoized, Once};

    #[test]
    fn once_returns_the_first_result_forever() {
        let once = Once::new(|x: u64| x * 2);

        assert_eq!(once.call(21), 42);
        assert_eq!(once.call(100), 42);
        assert_eq!(once.call(0), 42);
    }

    #[test]
    fn once_is_usable_across_threads() {
        let executions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&executions);
        let once = Arc::new(Once::new(move |x: u64| {
            counter.fetch_add(1, Ordering::SeqCst);
            x
        }));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let once = Arc::clone(&once);
                thread::spawn(move || once.call(i))
            })
            .collect();

        let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // exactly one execution, and every thread saw the same value
        assert_eq!(executions.load(Ordering::SeqCst), 1);
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn once_poisoned_by_a_panicking_operation() {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let once: Once<u64, u64> = Once::new(|_| panic!("boom"));

        // the first caller sees the operation's own panic
        assert!(catch_unwind(AssertUnwindSafe(|| once.call(1))).is_err());
        assert!(once.called());

        // later callers have no result to receive
        assert!(catch_unwind(AssertUnwindSafe(|| once.call(2))).is_err());
    }

    #[test]
    fn memoized_runs_once_per_distinct_argument() {
        let executions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&executions);
        let fib_ish = Memoized::new(move |n: u64| {
            counter.fetch_add(1, Ordering::SeqCst);
            n * n
        });

        assert_eq!(fib_ish.call(3), 9);
        assert_eq!(fib_ish.call(3), 9);
        assert_eq!(fib_ish.call(3), 9);
        assert_eq!(fib_ish.call(4), 16);

        assert_eq!(executions.load(Ordering::SeqCst), 2);
        assert_eq!(fib_ish.cached(), 2);
    }

    #[test]
    fn memoized_supports_non_numeric_keys() {
        let memo = Memoized::new(|name: String| name.len());

        assert_eq!(memo.call("throttle".to_string()), 8);
        assert_eq!(memo.call("throttle".to_string()), 8);
        assert_eq!(memo.call("zip".to_string()), 3);
        assert_eq!(memo.cached(), 2);
    }

    #[test]
    fn memoized_starts_empty() {
        let memo = Memoized::new(|x: u64| x);
        assert_eq!(memo.cached(), 0);
    }
}
