//! Asynchronous delivery of synthetic responses.
//!
//! A matched handler never runs inside the triggering `end()` call. The
//! scheduler spawns a coroutine that sleeps for the configured delay,
//! invokes the handler thunk, and delivers its outcome to the completion
//! callback — preserving the asynchronous-completion ordering callers get
//! from a real transport. A delay of zero still defers to the coroutine.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use may::coroutine;
use tracing::debug;

use crate::handler::{Completion, HandlerThunk};

/// Synthetic response delay.
///
/// Either a fixed duration or a provider re-invoked on every delivery,
/// allowing variable or jittered delay per test run. Evaluated at
/// scheduling time, not at configuration time.
#[derive(Clone)]
pub enum Timeout {
    /// Deliver after a fixed non-negative duration
    Fixed(Duration),
    /// Re-evaluate the delay on every delivery
    Provider(Arc<dyn Fn() -> Duration + Send + Sync>),
}

impl Timeout {
    /// Wrap a closure re-evaluated per delivery
    pub fn provider<F>(f: F) -> Self
    where
        F: Fn() -> Duration + Send + Sync + 'static,
    {
        Timeout::Provider(Arc::new(f))
    }

    /// Evaluate the delay for one delivery
    #[must_use]
    pub fn delay(&self) -> Duration {
        match self {
            Timeout::Fixed(d) => *d,
            Timeout::Provider(f) => f(),
        }
    }
}

impl Default for Timeout {
    /// Immediate delivery (still deferred to the scheduling coroutine)
    fn default() -> Self {
        Timeout::Fixed(Duration::ZERO)
    }
}

impl From<Duration> for Timeout {
    fn from(d: Duration) -> Self {
        Timeout::Fixed(d)
    }
}

impl fmt::Debug for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeout::Fixed(d) => f.debug_tuple("Fixed").field(d).finish(),
            Timeout::Provider(_) => f.debug_tuple("Provider").finish(),
        }
    }
}

/// Deliver a handler thunk's outcome to a completion callback after `delay`.
///
/// The thunk runs on a spawned coroutine, never inside this call, even for
/// a zero delay. A handler that returns a value delivers `Ok(value)`; one
/// that fails delivers `Err(error)`; a panicking handler is caught and
/// delivered as `Err` rather than unwinding across the scheduler boundary.
/// Exactly one of the two forms is delivered, exactly once.
///
/// With no completion callback the outcome is computed and dropped;
/// a dropped failure is logged at debug level. Once scheduled, delivery
/// always runs to completion — there is no cancellation.
pub fn deliver(thunk: HandlerThunk, completion: Option<Completion>, delay: Duration) {
    // SAFETY: may::coroutine::spawn() is marked unsafe by the may runtime.
    // Safe because: the closure is Send + 'static and owns everything it
    // touches (thunk, completion, delay).
    unsafe {
        coroutine::spawn(move || {
            coroutine::sleep(delay);

            let outcome = match catch_unwind(AssertUnwindSafe(thunk)) {
                Ok(result) => result,
                Err(panic) => Err(anyhow::anyhow!("handler panicked: {:?}", panic)),
            };

            match completion {
                Some(callback) => callback(outcome),
                None => {
                    if let Err(err) = outcome {
                        debug!(error = %err, "Synthetic failure dropped: no completion callback");
                    }
                }
            }
        });
    }
}
