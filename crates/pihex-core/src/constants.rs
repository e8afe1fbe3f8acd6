//! Constants for series truncation and process exit codes.

/// Cutoff for the convergent tail of each BBP series.
///
/// Terms beyond the digit position shrink by a factor of 16 each step;
/// once a term drops below this bound it can no longer influence the
/// extracted nibble, so summation stops.
pub const TAIL_EPSILON: f64 = 1e-17;

/// Stride of the denominator progression `8k + j` in each BBP series.
pub const SERIES_STEP: u64 = 8;

/// Process exit codes for the binary's failure classes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, including worker failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid request parameters.
    pub const ERROR_USAGE: i32 = 2;
    /// Unknown strategy or invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_epsilon_below_nibble_resolution() {
        // One nibble is worth 1/16 of the fractional part; the cutoff
        // must sit far below that.
        assert!(TAIL_EPSILON > 0.0);
        assert!(TAIL_EPSILON < 1.0 / 16.0 / 1e10);
    }

    #[test]
    fn exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_USAGE,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
