//! Spinner shown while an extraction runs.

use std::time::Duration;

use indicatif::ProgressBar;

/// Spinner for an in-flight extraction.
///
/// Draws to stderr so digits on stdout stay clean for piping. The
/// caller clears it once the result is ready.
#[must_use]
pub fn extraction_spinner(start: i64, count: i64) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "extracting {count} digits from position {start}"
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
