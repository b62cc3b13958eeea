use crate::util::trace::trace;

/// Splits `input` into consecutive groups of `size` elements. The last group holds whatever is left
/// over and may be shorter. A `size` below 1 is treated as 1.
///
/// An empty (but present) `input` yields a single empty group, `[[]]`, rather than no groups at
/// all. Callers relying on "one group per `size` elements" should check for that case.
///
/// Returns None if `input` is absent.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// assert_eq!(
///     slices::chunk(Some(digits), 3),
///     Some(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
/// );
/// assert_eq!(
///     slices::chunk(Some(digits), 8),
///     Some(vec![vec![1, 2, 3, 4, 5, 6, 7, 8], vec![9]])
/// );
/// ```
pub fn chunk<T: Clone, C: AsRef<[T]>>(input: Option<C>, size: isize) -> Option<Vec<Vec<T>>> {
    let input = input?;
    let slice = input.as_ref();

    let size = match usize::try_from(size) {
        Ok(size) if size >= 1 => size,
        _ => {
            trace!(size, "chunk size clamped to 1");
            1
        },
    };

    if slice.is_empty() {
        return Some(vec![Vec::new()]);
    }

    Some(slice.chunks(size).map(<[T]>::to_vec).collect())
}
