//! Property-based tests for the full extraction pipeline.

use proptest::prelude::*;

use pihex_core::error::PiError;
use pihex_orchestration::{Dispatcher, FixedParallelism};

fn extract(start: i64, count: i64, threads: Option<i64>, strategy: Option<&str>) -> String {
    Dispatcher::new()
        .calculate(start, count, threads, strategy)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// The threaded strategy reproduces the sequential digits for
    /// random windows and worker counts.
    #[test]
    fn strategies_agree(start in 0i64..300, count in 0i64..40, threads in 1i64..12) {
        let sequential = extract(start, count, None, None);
        let threaded = extract(start, count, Some(threads), Some("threads"));
        prop_assert_eq!(sequential, threaded, "window [{}, +{})", start, count);
    }

    /// Worker count is a performance knob; it never changes the digits.
    #[test]
    fn thread_count_is_output_invariant(
        start in 0i64..300,
        count in 1i64..40,
        low in 1i64..8,
        high in 8i64..40,
    ) {
        let few = extract(start, count, Some(low), Some("threads"));
        let many = extract(start, count, Some(high), Some("threads"));
        prop_assert_eq!(few, many);
    }

    /// Two adjacent windows concatenate to one larger window.
    #[test]
    fn windows_concatenate(start in 0i64..200, left in 0i64..20, right in 0i64..20) {
        let whole = extract(start, left + right, None, None);
        let first = extract(start, left, None, None);
        let second = extract(start + left, right, None, None);
        prop_assert_eq!(whole, first + &second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(15))]

    /// The timing wrapper reports the same digits the plain call returns.
    #[test]
    fn timing_reports_the_same_digits(start in 0i64..200, count in 0i64..30) {
        let dispatcher = Dispatcher::with_provider(Box::new(FixedParallelism(4)));
        let plain = dispatcher
            .calculate(start, count, Some(3), Some("threads"))
            .unwrap();
        let timed = dispatcher
            .calculate_with_timing(start, count, Some(3), Some("threads"))
            .unwrap();
        prop_assert_eq!(plain, timed.digits);
        prop_assert!(timed.time_millis >= 0.0);
    }
}

/// The first digits of pi come out of every dispatch path.
#[test]
fn reference_digits_all_paths() {
    assert_eq!(extract(0, 10, None, None), "243F6A8885");
    assert_eq!(extract(0, 10, None, Some("sequential")), "243F6A8885");
    assert_eq!(extract(0, 10, Some(4), Some("threads")), "243F6A8885");
    assert_eq!(extract(0, 10, None, Some("threads")), "243F6A8885");
}

/// Negative windows are rejected on every dispatch path.
#[test]
fn negative_windows_are_rejected() {
    let dispatcher = Dispatcher::new();
    for strategy in [None, Some("threads")] {
        let err = dispatcher.calculate(-1, 10, None, strategy).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument(_)), "{strategy:?}");
        let err = dispatcher.calculate(0, -10, None, strategy).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument(_)), "{strategy:?}");
    }
}
