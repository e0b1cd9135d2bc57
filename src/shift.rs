//! Reduction of rotation counts to an effective shift in `[0, len)`.
//!
//! Every rotation path in this crate reduces its count here first, so the
//! per-element work never depends on the magnitude of the count.

use crate::error::RotateError;

/// Reduces a left-rotation count modulo `len`.
///
/// Returns 0 for an empty sequence without evaluating a modulus.
#[inline]
pub fn effective_shift(shift: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    shift % len
}

/// Reduces a signed rotation count into `[0, len)`.
///
/// Negative counts rotate right: `-1` on `[1, 2, 3]` yields the same result
/// as a left shift of 2. Equivalent to `((k % n) + n) % n` but cannot
/// overflow for any `i64`.
#[inline]
pub fn effective_signed_shift(shift: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (shift as i128).rem_euclid(len as i128) as usize
}

/// Converts a signed count into a left-rotation count, rejecting negatives.
pub fn checked_shift(shift: i64) -> Result<usize, RotateError> {
    if shift < 0 {
        return Err(RotateError::NegativeShift(shift));
    }
    usize::try_from(shift).map_err(|_| RotateError::ShiftOverflow(shift))
}

/// Index in the source that lands at `dst_index` after a left shift of `shift`.
///
/// `shift` must already be reduced below `len`, and `dst_index < len`.
#[inline]
pub(crate) fn source_index(dst_index: usize, shift: usize, len: usize) -> usize {
    debug_assert!(dst_index < len && shift < len);
    // Subtract before adding so the index never overflows.
    if dst_index < len - shift {
        dst_index + shift
    } else {
        dst_index - (len - shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_shift_empty_is_zero() {
        assert_eq!(effective_shift(0, 0), 0);
        assert_eq!(effective_shift(1200, 0), 0);
        assert_eq!(effective_shift(usize::MAX, 0), 0);
    }

    #[test]
    fn test_effective_shift_reduces_modulo_len() {
        assert_eq!(effective_shift(1200, 9), 3);
        assert_eq!(effective_shift(9, 9), 0);
        assert_eq!(effective_shift(5, 1), 0);
        assert_eq!(effective_shift(2, 3), 2);
    }

    #[test]
    fn test_effective_signed_shift_normalizes_negatives() {
        assert_eq!(effective_signed_shift(-1, 3), 2);
        assert_eq!(effective_signed_shift(-3, 3), 0);
        assert_eq!(effective_signed_shift(-10, 9), 8);
        assert_eq!(effective_signed_shift(1200, 9), 3);
        assert_eq!(
            effective_signed_shift(i64::MIN, 7),
            (i64::MIN as i128).rem_euclid(7) as usize
        );
        assert_eq!(effective_signed_shift(-5, 0), 0);
    }

    #[test]
    fn test_checked_shift() {
        assert_eq!(checked_shift(0), Ok(0));
        assert_eq!(checked_shift(1200), Ok(1200));
        assert_eq!(checked_shift(-1), Err(RotateError::NegativeShift(-1)));
    }

    #[test]
    fn test_source_index_wraps() {
        let len = 9;
        let shift = 3;
        let mapped: Vec<usize> = (0..len).map(|i| source_index(i, shift, len)).collect();
        assert_eq!(mapped, vec![3, 4, 5, 6, 7, 8, 0, 1, 2]);
    }

    #[test]
    fn test_source_index_near_usize_max() {
        let len = usize::MAX;
        let shift = len - 1;
        assert_eq!(source_index(0, shift, len), len - 1);
        assert_eq!(source_index(1, shift, len), 0);
        assert_eq!(source_index(len - 1, shift, len), len - 2);
    }
}
