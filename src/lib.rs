//! Left rotation of slices in linear time, independent of the rotation count.
//!
//! # Two Entry Points
//!
//! - **Function** ([`rotate_left`]): allocates the rotated copy in one pass.
//! - **Operator** ([`OpRotateLeft`]): keeps a configured count and writes into
//!   a fresh vector, a preallocated buffer, or the input itself in place.
//!
//! Both reduce the count modulo the length before touching any element, so a
//! count of 1200 on nine elements costs the same as a count of 3.
//!
//! # Example
//!
//! ```
//! use array_rotate::{OpRotateLeft, rotate_left};
//!
//! let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! assert_eq!(rotate_left(&a, 1200), vec![4, 5, 6, 7, 8, 9, 1, 2, 3]);
//!
//! // Negative counts rotate right.
//! let op = OpRotateLeft::with_signed_shift(-1);
//! assert_eq!(op.apply(&a), vec![9, 1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

#[doc(hidden)]
pub mod bench_utils;
mod error;
mod op_rotate_left;
mod rotate;
mod shift;

pub use crate::error::RotateError;
pub use crate::op_rotate_left::{OpRotateLeft, Shift};
pub use crate::rotate::rotate_left;
pub use crate::shift::{checked_shift, effective_shift, effective_signed_shift};
