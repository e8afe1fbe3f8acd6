#![no_main]

use libfuzzer_sys::fuzz_target;

use pihex_core::strategy::{SequentialStrategy, Strategy, ThreadJoinStrategy};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    // First 4 bytes pick the position, next 4 the count, the last the workers
    let start = i64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 2_000);
    let count = i64::from(u32::from_le_bytes([data[4], data[5], data[6], data[7]]) % 48);
    let threads = usize::from(data[8] % 16) + 1;

    let sequential = SequentialStrategy.calculate(start, count, 1);
    let threaded = ThreadJoinStrategy.calculate(start, count, threads);

    match (sequential, threaded) {
        (Ok(s), Ok(t)) => {
            assert_eq!(s, t, "strategy divergence at start={start} count={count}");
        }
        _ => {} // Non-negative windows should succeed; errors are covered elsewhere
    }
});
