// src/throttle.rs

// utilbelt: a window-based throttle with at most one deferred invocation
// per window

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::{PendingPolicy, ThrottleConfig};
use crate::errors::ThrottleError;
use crate::timer;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::trace;

/// The main Throttle model.
/// Wraps an operation `FnMut(A) -> R` so that it starts at most once per
/// window. A is the argument type (use a tuple for several arguments),
/// R is the result type, C is the clock type, defaulting to SystemClock.
/// Calls that land inside an open window receive a clone of the last
/// recorded result; one of them survives as a deferred invocation that
/// runs when the window closes.
pub struct Throttle<A, R, C = SystemClock>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    C: Clock + 'static,
{
    inner: Arc<Inner<A, R, C>>,
}

struct Inner<A, R, C> {
    op: Mutex<Box<dyn FnMut(A) -> R + Send>>,
    state: Mutex<State<A, R>>,
    window_nanos: u64,
    policy: PendingPolicy,
    clock: C,
}

// shared closure state, guarded by a single mutex; the generation
// advances with every immediate execution so a timer scheduled against
// an earlier window can recognize itself as stale
struct State<A, R> {
    opened_at: Option<u64>,
    pending: Option<A>,
    last_result: Option<R>,
    generation: u64,
}

// methods for the Throttle type
impl<A, R, C> Throttle<A, R, C>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    C: Clock + 'static,
{
    // method to create a new throttle from a config object
    pub fn with_config<F>(operation: F, config: ThrottleConfig, clock: C) -> Result<Self, ThrottleError>
    where
        F: FnMut(A) -> R + Send + 'static,
    {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                op: Mutex::new(Box::new(operation)),
                state: Mutex::new(State {
                    opened_at: None,
                    pending: None,
                    last_result: None,
                    generation: 0,
                }),
                window_nanos: config.window.as_nanos() as u64,
                policy: config.policy,
                clock,
            }),
        })
    }

    // accessor method to return the window duration
    pub fn window(&self) -> Duration {
        Duration::from_nanos(self.inner.window_nanos)
    }

    // accessor method to return the pending-call policy
    pub fn policy(&self) -> PendingPolicy {
        self.inner.policy
    }

    /// Submit an invocation request.
    ///
    /// Outside a window the operation runs synchronously and its fresh
    /// result is returned. Inside a window the last recorded result is
    /// returned instead, and the call either becomes the window's single
    /// deferred invocation or is collapsed into the existing one
    /// according to the configured [`PendingPolicy`]. The deferred
    /// invocation's own result is never returned to a caller; it only
    /// becomes the next "last recorded result".
    pub fn call(&self, arg: A) -> Result<R, ThrottleError> {
        let now = self.inner.clock.now()?;
        let mut state = self.inner.state.lock();

        // window accounting consults only the injected clock, never the
        // timer thread, so it stays deterministic under a test clock
        let window_open = state
            .opened_at
            .is_some_and(|opened| now < opened.saturating_add(self.inner.window_nanos));

        if window_open {
            if let Some(last) = state.last_result.clone() {
                if state.pending.is_none() {
                    let close_at = state
                        .opened_at
                        .unwrap_or(now)
                        .saturating_add(self.inner.window_nanos);
                    let remaining = Duration::from_nanos(close_at.saturating_sub(now));
                    state.pending = Some(arg);
                    let generation = state.generation;
                    let inner = Arc::downgrade(&self.inner);
                    timer::schedule(remaining, move || fire(inner, generation));
                    trace!(remaining_nanos = remaining.as_nanos() as u64, "call deferred");
                } else {
                    match self.inner.policy {
                        PendingPolicy::KeepFirst => {
                            trace!("deferred invocation already pending, call dropped");
                        }
                        PendingPolicy::ReplaceLatest => {
                            state.pending = Some(arg);
                            trace!("pending invocation replaced with newest arguments");
                        }
                    }
                }
                return Ok(last);
            }
        }

        // the window has elapsed; a deferred invocation its timer has not
        // reached yet fires here, ahead of the new call
        if let Some(pending) = state.pending.take() {
            trace!("running deferred invocation before the next window");
            let result = {
                let mut op = self.inner.op.lock();
                (*op)(pending)
            };
            state.last_result = Some(result);
        }

        trace!("window closed, executing immediately");
        let result = {
            let mut op = self.inner.op.lock();
            (*op)(arg)
        };
        state.last_result = Some(result.clone());
        state.opened_at = Some(now);
        state.generation = state.generation.wrapping_add(1);
        Ok(result)
    }
}

impl<A, R, C> std::fmt::Debug for Throttle<A, R, C>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    C: Clock + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("window", &self.window())
            .field("policy", &self.inner.policy)
            .finish_non_exhaustive()
    }
}

impl<A, R> Throttle<A, R, SystemClock>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    // method to create a new throttle against the system clock
    pub fn new<F>(operation: F, window: Duration) -> Result<Self, ThrottleError>
    where
        F: FnMut(A) -> R + Send + 'static,
    {
        Self::with_config(operation, ThrottleConfig::new(window), SystemClock)
    }
}

// runs on the timer thread; the weak reference keeps a dropped throttle
// from being revived, and the generation plus a fresh clock read keep a
// lagging or early timer from touching a window it does not own
fn fire<A, R, C>(inner: Weak<Inner<A, R, C>>, generation: u64)
where
    A: Send + 'static,
    R: Send + 'static,
    C: Clock + 'static,
{
    let Some(inner) = inner.upgrade() else {
        return;
    };
    // on a clock failure the pending invocation stays queued; the next
    // call flushes it
    let Ok(now) = inner.clock.now() else {
        return;
    };
    let mut state = inner.state.lock();
    if state.generation != generation {
        return;
    }
    if let Some(opened) = state.opened_at {
        let close_at = opened.saturating_add(inner.window_nanos);
        if now < close_at {
            // the real-time sleep woke ahead of the injected clock
            let remaining = Duration::from_nanos(close_at.saturating_sub(now));
            drop(state);
            let weak = Arc::downgrade(&inner);
            timer::schedule(remaining, move || fire(weak, generation));
            return;
        }
    }
    if let Some(arg) = state.pending.take() {
        trace!("running deferred invocation");
        let result = {
            let mut op = inner.op.lock();
            (*op)(arg)
        };
        // recorded but never returned to a caller; the deferred run does
        // not open a new window
        state.last_result = Some(result);
    }
}
