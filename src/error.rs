//! Errors raised by the rotation entry points that accept untrusted input.

use thiserror::Error;

/// Failures of the checked rotation surfaces.
///
/// [`rotate_left`](crate::rotate_left) itself cannot fail; these only come
/// from signed-shift validation and preallocated output buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotateError {
    #[error("rotation count must be non-negative, got {0}")]
    NegativeShift(i64),
    #[error("rotation count {0} does not fit in usize")]
    ShiftOverflow(i64),
    #[error("output length {actual} does not match input length {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}
