//! Errors for the runtime conversions into vectors.
//!
//! Arithmetic never fails at runtime; mismatched operands are rejected by the
//! type checker. Only conversions from dynamically sized input can fail.

use core::fmt;

/// The error type for fallible vector conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisError {
    /// The input did not hold exactly one component per present axis.
    LengthMismatch {
        /// Number of present axes in the target vector.
        expected: usize,
        /// Number of components supplied.
        found: usize,
    },
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::LengthMismatch { expected, found } => write!(
                f,
                "expected {expected} components (one per present axis), found {found}"
            ),
        }
    }
}

impl std::error::Error for AxisError {}
