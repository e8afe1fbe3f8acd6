//! Orchestration interfaces.

use serde::Serialize;

/// Result of a timed extraction, ready for rendering.
///
/// `strategy` carries the label the caller asked for, not a normalized
/// form; the sequential path always reports `"sequential"`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Extracted digits, uppercase hex.
    pub digits: String,
    /// Strategy label for reporting.
    pub strategy: String,
    /// Worker count the calculation ran with.
    pub threads: usize,
    /// Wall-clock duration of the calculation in fractional milliseconds.
    pub time_millis: f64,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a completed extraction.
    fn present_result(&self, start: i64, count: i64, result: &ExecutionResult);

    /// Present an error.
    fn present_error(&self, error: &str);
}
