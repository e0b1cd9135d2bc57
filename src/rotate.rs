//! One-pass left rotation by index remapping.
//!
//! The count is reduced modulo the length up front, then every destination
//! slot is filled from its source index directly. Cost is O(n) time and O(n)
//! extra space for any count; there is no per-step loop.

use log::trace;

use crate::shift::{effective_shift, source_index};

/// Returns a new vector holding `values` rotated left by `shift` positions.
///
/// `result[i] == values[(i + shift) % values.len()]` for every `i`. The input
/// is not modified. An empty input yields an empty vector, and a shift that is
/// a multiple of the length yields a plain copy.
///
/// ```
/// use array_rotate::rotate_left;
///
/// let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// assert_eq!(rotate_left(&a, 1200), vec![4, 5, 6, 7, 8, 9, 1, 2, 3]);
/// ```
pub fn rotate_left<T: Clone>(values: &[T], shift: usize) -> Vec<T> {
    let len = values.len();
    if len == 0 {
        return Vec::new();
    }

    let shift = effective_shift(shift, len);
    trace!("rotate_left: len={len} effective_shift={shift}");
    if shift == 0 {
        return values.to_vec();
    }

    (0..len)
        .map(|i| values[source_index(i, shift, len)].clone())
        .collect()
}

/// Writes `src` rotated left by an already reduced `shift` into `dst`.
///
/// Both slices must have the same length and `shift < src.len()` when the
/// slices are non-empty.
pub(crate) fn remap_into<T: Clone>(src: &[T], dst: &mut [T], shift: usize) {
    let len = src.len();
    debug_assert_eq!(len, dst.len());
    // Two contiguous runs: src[shift..] then src[..shift].
    let head = len - shift;
    dst[..head].clone_from_slice(&src[shift..]);
    dst[head..].clone_from_slice(&src[..shift]);
}

/// Rotates `values` left in place by an already reduced `shift`.
///
/// Uses three reversals, so it needs no extra buffer and no `Clone` bound.
pub(crate) fn reverse_rotate<T>(values: &mut [T], shift: usize) {
    if values.is_empty() || shift == 0 {
        return;
    }
    values[..shift].reverse();
    values[shift..].reverse();
    values.reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_left_demo_input() {
        let a: Vec<i32> = (1..=9).collect();
        assert_eq!(rotate_left(&a, 1200), vec![4, 5, 6, 7, 8, 9, 1, 2, 3]);
    }

    #[test]
    fn test_rotate_left_single_step() {
        assert_eq!(rotate_left(&[1, 2, 3], 1), vec![2, 3, 1]);
    }

    #[test]
    fn test_rotate_left_single_element() {
        assert_eq!(rotate_left(&[1], 5), vec![1]);
    }

    #[test]
    fn test_rotate_left_empty() {
        let empty: [u8; 0] = [];
        assert!(rotate_left(&empty, 0).is_empty());
        assert!(rotate_left(&empty, usize::MAX).is_empty());
    }

    #[test]
    fn test_rotate_left_multiple_of_len_is_copy() {
        let a = vec!["a", "b", "c", "d"];
        assert_eq!(rotate_left(&a, 0), a);
        assert_eq!(rotate_left(&a, 4), a);
        assert_eq!(rotate_left(&a, 400), a);
    }

    #[test]
    fn test_rotate_left_does_not_mutate_input() {
        let a = vec![String::from("x"), String::from("y"), String::from("z")];
        let before = a.clone();
        let b = rotate_left(&a, 2);
        assert_eq!(a, before);
        assert_eq!(b, vec!["z", "x", "y"]);
    }

    #[test]
    fn test_rotate_left_huge_shift() {
        let a = [10, 20, 30, 40, 50];
        let k = usize::MAX;
        let expected = a[k % 5..].iter().chain(&a[..k % 5]).copied().collect::<Vec<_>>();
        assert_eq!(rotate_left(&a, k), expected);
    }

    #[test]
    fn test_remap_into_matches_rotate_left() {
        let src: Vec<u32> = (0..17).collect();
        for shift in 0..src.len() {
            let mut dst = vec![0; src.len()];
            remap_into(&src, &mut dst, shift);
            assert_eq!(dst, rotate_left(&src, shift), "shift {shift}");
        }
    }

    #[test]
    fn test_reverse_rotate_matches_rotate_left() {
        let src: Vec<u32> = (0..11).collect();
        for shift in 0..src.len() {
            let mut data = src.clone();
            reverse_rotate(&mut data, shift);
            assert_eq!(data, rotate_left(&src, shift), "shift {shift}");
        }
    }
}
