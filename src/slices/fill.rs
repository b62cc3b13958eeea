use std::ops::Range;

use super::bounds::{clamp_index, is_past};
use super::error::{FillError, IndexOutOfBounds, InvalidRange};
use crate::util::trace::trace;

/// Assigns `value` to every element of `input` from `start` up to, but not including, `end`,
/// mutating `input` in place. The input is handed back afterwards to allow chaining.
///
/// The range is lenient:
/// - A negative `start` is clamped to 0 and an `end` past the length is clamped to the length.
/// - If `start > end`, `start` is past the length or `end < 1`, nothing is assigned.
///
/// Does nothing and returns None if `input` is absent. See [`try_fill`] for a version that reports
/// bad ranges.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let mut digits = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
/// slices::fill(Some(&mut digits), 1, 3, 6);
/// assert_eq!(digits, [1, 2, 3, 1, 1, 1, 7, 8, 9]);
///
/// slices::fill(Some(&mut digits), 0, 6, 3);
/// assert_eq!(digits, [1, 2, 3, 1, 1, 1, 7, 8, 9]);
/// ```
pub fn fill<T: Clone, C: AsMut<[T]>>(input: Option<C>, value: T, start: isize, end: isize) -> Option<C> {
    let mut input = input?;
    let len = input.as_mut().len();

    if start > end || is_past(start, len) || end < 1 {
        trace!(start, end, len, "fill range ignored");
        return Some(input);
    }

    let range = clamp_index(start, len)..clamp_index(end, len);
    input.as_mut()[range].fill(value);

    Some(input)
}

/// Assigns `value` to every element of `input` within `range`, mutating `input` in place and
/// returning it.
///
/// Unlike [`fill`], the range isn't clamped and is rejected instead if it's backwards or runs past
/// the end of `input`. An empty range is fine and assigns nothing.
///
/// # Errors
/// - [`FillError::InvalidRange`] if `range.start > range.end`.
/// - [`FillError::IndexOutOfBounds`] if `range.end > input.len()`.
///
/// # Examples
/// ```
/// # use collection_ops::slices::{self, FillError, IndexOutOfBounds};
/// let mut digits = [1, 2, 3, 4];
/// assert_eq!(slices::try_fill(&mut digits, 0, 1..3), Ok(&mut [1, 0, 0, 4][..]));
/// assert_eq!(
///     slices::try_fill(&mut digits, 0, 2..5),
///     Err(FillError::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 4 }))
/// );
/// ```
pub fn try_fill<T: Clone>(input: &mut [T], value: T, range: Range<usize>) -> Result<&mut [T], FillError> {
    let Range { start, end } = range;

    if start > end {
        return Err(InvalidRange { start, end }.into());
    }
    if end > input.len() {
        return Err(IndexOutOfBounds { index: end, len: input.len() }.into());
    }

    input[start..end].fill(value);
    Ok(input)
}
