//! Digit ranges and their partitioning into worker segments.

use num_integer::Integer;

use crate::error::PiError;

/// A validated, half-open run of digit positions `[start, start + count)`.
///
/// Construction through [`DigitRange::new`] is the single validation
/// gate for request parameters; code holding a `DigitRange` never
/// re-checks signs or bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRange {
    /// First digit position, zero-based.
    pub start: u64,
    /// Number of digits to extract.
    pub count: u64,
}

impl DigitRange {
    /// Validate raw request parameters into a range.
    ///
    /// Negative `start` or `count` is rejected. A zero `count` is a
    /// valid empty range.
    pub fn new(start: i64, count: i64) -> Result<Self, PiError> {
        if start < 0 {
            return Err(PiError::InvalidArgument(format!(
                "start must be >= 0, got {start}"
            )));
        }
        if count < 0 {
            return Err(PiError::InvalidArgument(format!(
                "count must be >= 0, got {count}"
            )));
        }
        #[allow(clippy::cast_sign_loss)]
        Ok(Self {
            start: start as u64,
            count: count as u64,
        })
    }

    /// Iterate the digit positions covered by this range.
    #[must_use]
    pub fn positions(&self) -> std::ops::Range<u64> {
        self.start..self.start + self.count
    }

    /// Whether the range covers no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// A contiguous sub-range assigned to one worker, tagged with the
/// index of its output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// First digit position of the sub-range.
    pub start: u64,
    /// Number of digits in the sub-range.
    pub count: u64,
    /// Reassembly index; output is concatenated in ordinal order.
    pub ordinal: usize,
}

impl Segment {
    /// View the segment as a plain digit range.
    #[must_use]
    pub fn range(&self) -> DigitRange {
        DigitRange {
            start: self.start,
            count: self.count,
        }
    }
}

/// Split a range into at most `workers` contiguous segments.
///
/// The effective worker count is `min(workers, count)`, at least one
/// for a non-empty range; an empty range yields no segments. When the
/// count does not divide evenly, the first `count % workers` segments
/// carry one extra digit, so segment sizes differ by at most one.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn partition(range: DigitRange, workers: usize) -> Vec<Segment> {
    if range.count == 0 {
        return Vec::new();
    }

    let effective = (workers.max(1) as u64).min(range.count);
    let (base, extra) = range.count.div_rem(&effective);

    let mut segments = Vec::with_capacity(effective as usize);
    let mut cursor = range.start;
    for ordinal in 0..effective as usize {
        let count = if (ordinal as u64) < extra {
            base + 1
        } else {
            base
        };
        segments.push(Segment {
            start: cursor,
            count,
            ordinal,
        });
        cursor += count;
    }
    segments
}
