#![no_main]

use libfuzzer_sys::fuzz_target;

use pihex_core::extractor;
use pihex_core::segment::DigitRange;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // First 4 bytes pick the position, next 4 the count, capped for speed
    let start = i64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 5_000);
    let count = i64::from(u32::from_le_bytes([data[4], data[5], data[6], data[7]]) % 64);

    let Ok(range) = DigitRange::new(start, count) else {
        return;
    };
    let digits = extractor::digits_hex(range);
    assert_eq!(digits.len() as i64, count, "length mismatch at start={start}");
    assert!(
        digits.bytes().all(|b| b"0123456789ABCDEF".contains(&b)),
        "non-hex output at start={start}: {digits}"
    );
});
