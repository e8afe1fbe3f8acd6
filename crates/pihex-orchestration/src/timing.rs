//! Wall-clock timing around a calculation.

use std::time::{Duration, Instant};

/// A value paired with how long it took to produce.
#[derive(Debug, Clone)]
pub struct TimedResult<T> {
    /// The wrapped outcome.
    pub value: T,
    /// Monotonic elapsed time of the wrapped call.
    pub elapsed: Duration,
}

impl<T> TimedResult<T> {
    /// Elapsed time as fractional milliseconds.
    #[must_use]
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Run a task and capture its duration.
///
/// The clock is `Instant`, so the reading is monotonic and never
/// negative. The task's outcome passes through `value` untouched;
/// failures are not intercepted here.
pub fn measure<T>(task: impl FnOnce() -> T) -> TimedResult<T> {
    let started = Instant::now();
    let value = task();
    TimedResult {
        value,
        elapsed: started.elapsed(),
    }
}
