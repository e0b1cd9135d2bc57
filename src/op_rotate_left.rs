//! Reusable left-rotation operator.
//!
//! [`OpRotateLeft`] holds a rotation count and applies it to any slice. It
//! offers three outputs: a fresh vector, a caller-owned buffer, or the input
//! itself rotated in place.

use log::debug;

use crate::error::RotateError;
use crate::rotate::{remap_into, reverse_rotate, rotate_left};
use crate::shift::{effective_shift, effective_signed_shift};

/// Rotation count as configured by the caller.
///
/// Signed counts are kept as given and reduced per input length, so the same
/// operator can be applied to slices of different sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shift {
    Left(usize),
    Signed(i64),
}

impl Shift {
    /// Reduces this count for a sequence of `len` elements.
    pub fn effective(self, len: usize) -> usize {
        match self {
            Shift::Left(k) => effective_shift(k, len),
            Shift::Signed(k) => effective_signed_shift(k, len),
        }
    }
}

/// Left-rotation operator.
///
/// Every apply method produces `result[i] == input[(i + k) % n]` where `k` is
/// the configured shift reduced for the input length `n`. When that reduced
/// shift is 0 the operator copies (or leaves the data alone) without
/// remapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpRotateLeft {
    shift: Shift,
}

impl Default for OpRotateLeft {
    fn default() -> Self {
        Self {
            shift: Shift::Left(0),
        }
    }
}

impl OpRotateLeft {
    pub fn new(shift: usize) -> Self {
        Self {
            shift: Shift::Left(shift),
        }
    }

    pub fn with_signed_shift(shift: i64) -> Self {
        Self {
            shift: Shift::Signed(shift),
        }
    }

    pub fn set_shift(&mut self, shift: usize) -> &mut Self {
        self.shift = Shift::Left(shift);
        self
    }

    /// Negative values rotate right by their magnitude.
    pub fn set_signed_shift(&mut self, shift: i64) -> &mut Self {
        self.shift = Shift::Signed(shift);
        self
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    pub fn effective_shift(&self, len: usize) -> usize {
        self.shift.effective(len)
    }

    pub fn apply<T: Clone>(&self, values: &[T]) -> Vec<T> {
        let shift = self.effective_shift(values.len());
        if shift == 0 {
            debug!("OpRotateLeft: identity rotation on {} elements", values.len());
            return values.to_vec();
        }
        rotate_left(values, shift)
    }

    /// Writes the rotation of `src` into `dst`.
    ///
    /// `dst` must have the same length as `src`; otherwise it is left
    /// untouched and [`RotateError::LengthMismatch`] is returned.
    pub fn apply_to_preallocated<T: Clone>(
        &self,
        src: &[T],
        dst: &mut [T],
    ) -> Result<(), RotateError> {
        if src.len() != dst.len() {
            return Err(RotateError::LengthMismatch {
                expected: src.len(),
                actual: dst.len(),
            });
        }

        let shift = self.effective_shift(src.len());
        if shift == 0 {
            dst.clone_from_slice(src);
            return Ok(());
        }
        remap_into(src, dst, shift);
        Ok(())
    }

    /// Rotates `values` in place with O(1) extra space.
    pub fn apply_in_place<T>(&self, values: &mut [T]) {
        let shift = self.effective_shift(values.len());
        if shift == 0 {
            debug!("OpRotateLeft: identity rotation on {} elements", values.len());
            return;
        }
        reverse_rotate(values, shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let op = OpRotateLeft::default();
        assert_eq!(op.shift(), Shift::Left(0));
        assert_eq!(op.apply(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_shift_chains() {
        let mut op = OpRotateLeft::default();
        op.set_shift(4).set_signed_shift(-1);
        assert_eq!(op.shift(), Shift::Signed(-1));
        assert_eq!(op.apply(&['a', 'b', 'c']), vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_apply_matches_rotate_left() {
        let values: Vec<i32> = (1..=9).collect();
        let op = OpRotateLeft::new(1200);
        assert_eq!(op.apply(&values), rotate_left(&values, 1200));
    }

    #[test]
    fn test_signed_shift_reduced_per_length() {
        let op = OpRotateLeft::with_signed_shift(-2);
        assert_eq!(op.effective_shift(5), 3);
        assert_eq!(op.effective_shift(2), 0);
        assert_eq!(op.effective_shift(0), 0);
        assert_eq!(op.apply(&[1, 2, 3, 4, 5]), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_apply_to_preallocated() {
        let src = [1, 2, 3, 4];
        let mut dst = [0; 4];
        OpRotateLeft::new(1)
            .apply_to_preallocated(&src, &mut dst)
            .expect("same length");
        assert_eq!(dst, [2, 3, 4, 1]);

        OpRotateLeft::new(8)
            .apply_to_preallocated(&src, &mut dst)
            .expect("same length");
        assert_eq!(dst, src);
    }

    #[test]
    fn test_apply_to_preallocated_length_mismatch() {
        let src = [1, 2, 3];
        let mut dst = [9; 2];
        let err = OpRotateLeft::new(1)
            .apply_to_preallocated(&src, &mut dst)
            .unwrap_err();
        assert_eq!(
            err,
            RotateError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(dst, [9, 9]);
    }

    #[test]
    fn test_apply_to_preallocated_empty() {
        let src: [u8; 0] = [];
        let mut dst: [u8; 0] = [];
        assert!(
            OpRotateLeft::new(3)
                .apply_to_preallocated(&src, &mut dst)
                .is_ok()
        );
    }

    #[test]
    fn test_apply_in_place() {
        let mut values = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        OpRotateLeft::new(1200).apply_in_place(&mut values);
        assert_eq!(values, vec![4, 5, 6, 7, 8, 9, 1, 2, 3]);
    }

    #[test]
    fn test_apply_in_place_without_clone() {
        struct Token(u8);
        let mut values = vec![Token(0), Token(1), Token(2)];
        OpRotateLeft::new(1).apply_in_place(&mut values);
        let ids: Vec<u8> = values.iter().map(|t| t.0).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }
}
