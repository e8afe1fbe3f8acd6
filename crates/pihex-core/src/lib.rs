//! # pihex-core
//!
//! Core library for the PiHex-rs hexadecimal pi digit extractor.
//! Implements the BBP spigot algorithm, range partitioning, and the
//! sequential and thread-fan-out execution strategies.

pub mod constants;
pub mod error;
pub mod extractor;
pub mod registry;
pub mod segment;
pub mod strategy;

// Re-exports
pub use constants::{exit_codes, TAIL_EPSILON};
pub use error::PiError;
pub use extractor::{digits, digits_hex, hex_digit_at};
pub use registry::StrategyRegistry;
pub use segment::{partition, DigitRange, Segment};
pub use strategy::{SequentialStrategy, Strategy, ThreadJoinStrategy};

/// Extract hexadecimal digits of pi from a raw start/count pair.
///
/// This is a convenience function for simple use cases. For strategy
/// selection, parallel execution, and timing, use the orchestration
/// crate's dispatcher.
///
/// # Example
/// ```
/// assert_eq!(pihex_core::hex_digits(0, 5).unwrap(), "243F6");
/// assert_eq!(pihex_core::hex_digits(5, 5).unwrap(), "A8885");
/// ```
pub fn hex_digits(start: i64, count: i64) -> Result<String, PiError> {
    let range = DigitRange::new(start, count)?;
    Ok(extractor::digits_hex(range))
}
