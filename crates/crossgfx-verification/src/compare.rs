//! Exact pixel comparison
//!
//! Comparison is exact equality on the packed 32-bit representation; there
//! is no tolerance or color-space awareness. Every divergent index is
//! collected rather than stopping at the first, so one validation call
//! surfaces the full spatial pattern of a rendering bug.

use std::fmt;

/// A single divergent pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Index into the row-major pixel buffer
    pub index: usize,
    /// Expected packed pixel value
    pub expected: u32,
    /// Observed packed pixel value
    pub actual: u32,
}

/// Every divergent pixel found by one comparison, tagged with the caller's
/// diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchReport {
    /// Caller-supplied context for the comparison
    pub message: String,
    /// All divergent pixels, in index order
    pub mismatches: Vec<Mismatch>,
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} mismatched pixel(s)", self.message, self.mismatches.len())?;
        for mismatch in &self.mismatches {
            write!(
                f,
                "\nMismatch at index {}: Expected: {:#010x} Actual: {:#010x}",
                mismatch.index, mismatch.expected, mismatch.actual
            )?;
        }
        Ok(())
    }
}

/// Compares two equal-length pixel buffers element-wise
///
/// # Arguments
/// * `expected` - Reference pixel values
/// * `actual` - Normalized read-back pixel values
/// * `message` - Diagnostic context attached to any mismatch report
///
/// # Returns
/// `Ok(())` when every index matches, otherwise a report listing every
/// divergent index with both values.
///
/// # Panics
/// Panics if the buffer lengths differ; the caller sizes both from the same
/// range descriptor, so a length mismatch is a test-authoring bug.
pub fn compare_pixels(expected: &[u32], actual: &[u32], message: &str) -> Result<(), MismatchReport> {
    assert_eq!(
        expected.len(),
        actual.len(),
        "expected and actual pixel counts must agree"
    );

    let mismatches: Vec<Mismatch> = expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (expected, actual))| expected != actual)
        .map(|(index, (&expected, &actual))| Mismatch { index, expected, actual })
        .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = mismatches.len(), message, "pixel comparison failed");
        Err(MismatchReport {
            message: message.to_owned(),
            mismatches,
        })
    }
}
