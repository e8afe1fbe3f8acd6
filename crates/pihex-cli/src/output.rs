//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Format a digit string for display.
///
/// Long runs are truncated unless `verbose` is set; otherwise digits
/// are grouped in blocks of eight for readability.
#[must_use]
pub fn format_digits(digits: &str, verbose: bool) -> String {
    if !verbose && digits.len() > 100 {
        return format!(
            "{}...{} ({} digits)",
            &digits[..50],
            &digits[digits.len() - 50..],
            digits.len()
        );
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 8);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 8 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write the bare digit string to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, digits: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{digits}")?;
    Ok(())
}
