// src/functions.rs

// once, memoize and delay decorators

// dependencies
use crate::timer::{self, TimerHandle};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::hash::Hash;
use std::time::Duration;
use tracing::trace;

/// Wrapper that runs its operation at most one time.
/// The first call consumes the operation and records its result; every
/// later call returns a clone of that result and its arguments are
/// ignored. A panic in the operation poisons the wrapper: the panic
/// reaches the first caller, and every later call panics too, since
/// there is no result to hand out.
pub struct Once<A, R> {
    state: Mutex<OnceState<A, R>>,
}

enum OnceState<A, R> {
    Ready(Box<dyn FnOnce(A) -> R + Send>),
    Called(R),
    Poisoned,
}

impl<A, R> Once<A, R>
where
    R: Clone,
{
    pub fn new<F>(operation: F) -> Self
    where
        F: FnOnce(A) -> R + Send + 'static,
    {
        Self {
            state: Mutex::new(OnceState::Ready(Box::new(operation))),
        }
    }

    pub fn call(&self, arg: A) -> R {
        let mut state = self.state.lock();
        // leave Poisoned in place while the operation runs; a panic
        // inside it keeps the wrapper in that state
        match std::mem::replace(&mut *state, OnceState::Poisoned) {
            OnceState::Ready(op) => {
                let result = op(arg);
                *state = OnceState::Called(result.clone());
                result
            }
            OnceState::Called(result) => {
                let value = result.clone();
                *state = OnceState::Called(result);
                value
            }
            OnceState::Poisoned => panic!("once operation panicked on its first call"),
        }
    }

    /// Whether the operation has already run (or panicked trying).
    pub fn called(&self) -> bool {
        !matches!(&*self.state.lock(), OnceState::Ready(_))
    }
}

/// Wrapper that caches results by argument.
/// The cache belongs to the wrapper itself and is never evicted; an
/// argument equal to a previous one returns the cached result without
/// running the operation again.
pub struct Memoized<A, R>
where
    A: Hash + Eq + Clone,
    R: Clone,
{
    cache: DashMap<A, R>,
    op: Mutex<Box<dyn FnMut(A) -> R + Send>>,
}

impl<A, R> Memoized<A, R>
where
    A: Hash + Eq + Clone,
    R: Clone,
{
    pub fn new<F>(operation: F) -> Self
    where
        F: FnMut(A) -> R + Send + 'static,
    {
        Self {
            cache: DashMap::new(),
            op: Mutex::new(Box::new(operation)),
        }
    }

    pub fn call(&self, arg: A) -> R {
        if let Some(hit) = self.cache.get(&arg) {
            trace!("memoized result reused");
            return hit.value().clone();
        }
        let result = {
            let mut op = self.op.lock();
            (*op)(arg.clone())
        };
        self.cache.insert(arg, result.clone());
        result
    }

    /// Number of distinct arguments cached so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// Run `operation(arg)` once `wait` has elapsed.
/// The returned handle can cancel the invocation before it fires; its
/// result is not observable.
pub fn delay<A, F>(operation: F, wait: Duration, arg: A) -> TimerHandle
where
    A: Send + 'static,
    F: FnOnce(A) + Send + 'static,
{
    timer::schedule(wait, move || operation(arg))
}
