// src/timer.rs

// cancellable one-shot timer used for deferred invocations

// dependencies
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::trace;

/// Handle to a scheduled task.
/// Cancellation is checked once, right before the task would run; it does
/// not interrupt an in-progress wait. Dropping the handle does NOT cancel,
/// so fire-and-forget callers may simply discard it.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    /// Prevent the task from running, if it has not run already.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
        trace!("timer cancelled");
    }

    /// Whether `cancel` has been called on this handle.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Run `task` after `wait` has elapsed, unless the returned handle is
/// cancelled first. The task runs on its own thread.
pub fn schedule<F>(wait: Duration, task: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);

    thread::spawn(move || {
        thread::sleep(wait);
        if !flag.load(Ordering::Relaxed) {
            task();
        }
    });

    TimerHandle { cancelled }
}
