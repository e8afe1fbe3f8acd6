//! Execution strategies: sequential and thread-per-segment fan-out.
//!
//! `Strategy` is the public trait consumed by orchestration. Both
//! implementations must produce byte-identical output for the same
//! range, whatever the thread argument.

use std::any::Any;
use std::thread;

use crate::error::PiError;
use crate::extractor;
use crate::segment::{partition, DigitRange, Segment};

/// Public trait for digit-extraction strategies, consumed by orchestration.
pub trait Strategy: std::fmt::Debug + Send + Sync {
    /// Extract `count` hex digits starting at `start`, using at most
    /// `threads` workers where the strategy is parallel.
    fn calculate(&self, start: i64, count: i64, threads: usize) -> Result<String, PiError>;

    /// Registered name of this strategy.
    fn name(&self) -> &'static str;
}

/// Single-threaded extraction on the calling thread.
#[derive(Debug)]
pub struct SequentialStrategy;

impl SequentialStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SequentialStrategy {
    fn calculate(&self, start: i64, count: i64, _threads: usize) -> Result<String, PiError> {
        let range = DigitRange::new(start, count)?;
        Ok(extractor::digits_hex(range))
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Fan-out over freshly spawned OS threads, one per segment.
///
/// Threads are created per request and never reused; the calling
/// thread blocks at a single join barrier until every worker is done.
#[derive(Debug)]
pub struct ThreadJoinStrategy;

impl ThreadJoinStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadJoinStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for ThreadJoinStrategy {
    fn calculate(&self, start: i64, count: i64, threads: usize) -> Result<String, PiError> {
        let range = DigitRange::new(start, count)?;
        let segments = partition(range, threads);
        let mut slots: Vec<Option<String>> = vec![None; segments.len()];

        fan_out(&segments, &mut slots, extractor::digits_hex)?;

        // Reassembly is pure concatenation in ordinal order; a slot can
        // only be empty when its worker died, and that returned above.
        Ok(slots.into_iter().flatten().collect())
    }

    fn name(&self) -> &'static str {
        "threads"
    }
}

/// Run one worker thread per segment, each writing into its private
/// output slot. Every handle is joined before this returns; the first
/// failed segment in ordinal order becomes a `Worker` error.
fn fan_out<F>(segments: &[Segment], slots: &mut [Option<String>], worker: F) -> Result<(), PiError>
where
    F: Fn(DigitRange) -> String + Sync,
{
    let join_results: Vec<Result<(), String>> = thread::scope(|scope| {
        let handles: Vec<_> = segments
            .iter()
            .zip(slots.iter_mut())
            .map(|(segment, slot)| {
                let worker = &worker;
                scope.spawn(move || {
                    *slot = Some(worker(segment.range()));
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|panic| panic_message(panic.as_ref())))
            .collect()
    });

    for (segment, joined) in segments.iter().zip(join_results) {
        if let Err(message) = joined {
            return Err(PiError::Worker(format!(
                "segment {} panicked: {message}",
                segment.ordinal
            )));
        }
    }
    Ok(())
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_known_digits() {
        let strategy = SequentialStrategy::new();
        assert_eq!(strategy.calculate(0, 10, 1).unwrap(), "243F6A8885");
    }

    #[test]
    fn sequential_ignores_thread_argument() {
        let strategy = SequentialStrategy::new();
        assert_eq!(
            strategy.calculate(5, 5, 1).unwrap(),
            strategy.calculate(5, 5, 8).unwrap()
        );
    }

    #[test]
    fn sequential_rejects_negative_start() {
        let strategy = SequentialStrategy::new();
        let err = strategy.calculate(-1, 5, 1).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument(_)));
    }

    #[test]
    fn threads_known_digits() {
        let strategy = ThreadJoinStrategy::new();
        assert_eq!(strategy.calculate(0, 10, 4).unwrap(), "243F6A8885");
    }

    #[test]
    fn threads_matches_sequential_for_any_worker_count() {
        let sequential = SequentialStrategy::new();
        let threaded = ThreadJoinStrategy::new();
        for count in [1i64, 5, 13, 32] {
            let expected = sequential.calculate(3, count, 1).unwrap();
            for workers in [1usize, 2, 4, 8, 40] {
                assert_eq!(
                    threaded.calculate(3, count, workers).unwrap(),
                    expected,
                    "count {count} with {workers} workers"
                );
            }
        }
    }

    #[test]
    fn threads_zero_count_yields_empty() {
        let strategy = ThreadJoinStrategy::new();
        assert_eq!(strategy.calculate(0, 0, 4).unwrap(), "");
    }

    #[test]
    fn threads_rejects_negative_count() {
        let strategy = ThreadJoinStrategy::new();
        let err = strategy.calculate(0, -2, 4).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument(_)));
    }

    #[test]
    fn strategy_names() {
        assert_eq!(SequentialStrategy::new().name(), "sequential");
        assert_eq!(ThreadJoinStrategy::new().name(), "threads");
    }

    #[test]
    fn fan_out_fills_every_slot() {
        let range = DigitRange::new(0, 10).unwrap();
        let segments = partition(range, 3);
        let mut slots: Vec<Option<String>> = vec![None; segments.len()];
        fan_out(&segments, &mut slots, |r| r.start.to_string()).unwrap();
        assert_eq!(
            slots,
            vec![
                Some("0".to_string()),
                Some("4".to_string()),
                Some("7".to_string())
            ]
        );
    }

    #[test]
    fn fan_out_reports_first_panicking_segment() {
        let range = DigitRange::new(0, 4).unwrap();
        let segments = partition(range, 2);
        let mut slots: Vec<Option<String>> = vec![None; segments.len()];
        let result = fan_out(&segments, &mut slots, |r| {
            assert!(r.start != 2, "injected failure");
            "ok".to_string()
        });
        match result.unwrap_err() {
            PiError::Worker(message) => {
                assert!(message.contains("segment 1"), "message was: {message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn panic_message_extracts_str_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new("grown".to_string());
        assert_eq!(panic_message(payload.as_ref()), "grown");
        let payload: Box<dyn Any + Send> = Box::new(7u32);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn default_constructors() {
        let _sequential = SequentialStrategy::default();
        let _threaded = ThreadJoinStrategy::default();
    }
}
