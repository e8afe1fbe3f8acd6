//! BBP spigot extraction of hexadecimal pi digits.
//!
//! Computes the fractional part of `16^n * pi` directly at position n,
//! so any digit is reachable without computing the ones before it.
//! Each position is evaluated independently; nothing is carried between
//! digits or between calls.

use crate::constants::{SERIES_STEP, TAIL_EPSILON};
use crate::segment::DigitRange;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Extract the digits of a range as raw nibble values (0-15).
#[must_use]
pub fn digits(range: DigitRange) -> Vec<u8> {
    range.positions().map(hex_digit_at).collect()
}

/// Extract the digits of a range as an uppercase hex string.
///
/// The output length equals `range.count`; an empty range yields an
/// empty string.
#[must_use]
pub fn digits_hex(range: DigitRange) -> String {
    digits(range)
        .into_iter()
        .map(|nibble| char::from(HEX_CHARS[usize::from(nibble)]))
        .collect()
}

/// Extract the single hexadecimal digit of pi at a zero-based position.
///
/// Position 0 is the first fractional digit (2, since pi = 3.243F...
/// in hexadecimal).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hex_digit_at(position: u64) -> u8 {
    let s1 = fractional_sum(1, position);
    let s4 = fractional_sum(4, position);
    let s5 = fractional_sum(5, position);
    let s6 = fractional_sum(6, position);

    // 16^n * pi = 4*S1 - 2*S4 - S5 - S6 (mod 1); the leading nibble of
    // the fractional part is the digit at n.
    let mut frac = 4.0 * s1 - 2.0 * s4 - s5 - s6;
    frac -= frac.floor();
    (frac * 16.0) as u8
}

/// Fractional part of `16^position * S_j` where
/// `S_j = sum_{k>=0} 1 / (16^k * (8k + j))`.
///
/// Terms up to `k = position` carry a positive power of 16 and are
/// reduced with modular exponentiation; the tail beyond shrinks by a
/// factor of 16 per term and is cut at [`TAIL_EPSILON`]. The running
/// sum is reduced to its fractional part after every term so it never
/// grows past 1.
#[allow(clippy::cast_precision_loss)]
fn fractional_sum(j: u64, position: u64) -> f64 {
    let mut sum = 0.0_f64;

    let mut denom = j;
    for k in 0..=position {
        let pow = pow_mod_16(position - k, denom);
        sum = (sum + pow as f64 / denom as f64).fract();
        denom += SERIES_STEP;
    }

    let mut num = 1.0 / 16.0;
    loop {
        let term = num / denom as f64;
        if term < TAIL_EPSILON {
            break;
        }
        sum = (sum + term).fract();
        num /= 16.0;
        denom += SERIES_STEP;
    }

    sum
}

/// Compute `16^exp mod modulus` by binary square-and-multiply.
fn pow_mod_16(mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut base = 16 % modulus;
    let mut result = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Multiply under a modulus with `u128` intermediates so products of
/// operands near `u64::MAX` cannot overflow.
#[allow(clippy::cast_possible_truncation)]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(modulus)) as u64
}
