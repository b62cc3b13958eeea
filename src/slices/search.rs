use super::bounds::clamp_index;
use crate::util::trace::trace;

/// Returns the index of the first element of `input` that satisfies `predicate`, searching forward
/// from `from` (or 0 if None). Returns None if nothing matches.
///
/// A negative `from` is clamped to 0, while a `from` at or past the end of `input` finds nothing.
/// An absent `input` finds nothing either.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let digits = [1, 2, 3, 1, 2, 3];
/// assert_eq!(slices::find_index(Some(digits), |v| *v == 2, None), Some(1));
/// assert_eq!(slices::find_index(Some(digits), |v| *v == 2, Some(2)), Some(4));
/// assert_eq!(slices::find_index(Some(digits), |v| *v == 4, None), None);
/// ```
pub fn find_index<T, C, F>(input: Option<C>, predicate: F, from: Option<isize>) -> Option<usize>
where
    C: AsRef<[T]>,
    F: FnMut(&T) -> bool,
{
    let input = input?;
    let slice = input.as_ref();

    let from = from.unwrap_or(0);
    let start = clamp_index(from, slice.len());
    if start >= slice.len() {
        trace!(from, len = slice.len(), "search starts past the end");
        return None;
    }

    slice[start..]
        .iter()
        .position(predicate)
        .map(|offset| start + offset)
}

/// Splits `input` into the elements to keep and the elements `predicate(elem, index)` selects for
/// removal, returned as `(kept, removed)`. Both keep the original relative order and `input` is
/// left untouched.
///
/// Returns `(None, None)` if `input` is absent.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let digits = [1, 2, 3, 4, 5];
/// let (kept, removed) = slices::remove(Some(digits), |v, _| v % 2 == 0);
/// assert_eq!(kept, Some(vec![1, 3, 5]));
/// assert_eq!(removed, Some(vec![2, 4]));
/// ```
pub fn remove<T, C, F>(input: Option<C>, mut predicate: F) -> (Option<Vec<T>>, Option<Vec<T>>)
where
    T: Clone,
    C: AsRef<[T]>,
    F: FnMut(&T, usize) -> bool,
{
    let Some(input) = input else {
        return (None, None);
    };
    let slice = input.as_ref();

    let mut kept = Vec::with_capacity(slice.len());
    let mut removed = Vec::with_capacity(slice.len() / 2);
    for (index, elem) in slice.iter().enumerate() {
        if predicate(elem, index) {
            removed.push(elem.clone());
        } else {
            kept.push(elem.clone());
        }
    }

    (Some(kept), Some(removed))
}

/// Reverses the order of the elements of `input` in place. Does nothing if `input` is absent.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let mut digits = vec![1, 2, 3, 4];
/// slices::reverse_in_place(Some(&mut digits));
/// assert_eq!(digits, [4, 3, 2, 1]);
/// ```
pub fn reverse_in_place<T, C: AsMut<[T]>>(input: Option<C>) {
    if let Some(mut input) = input {
        input.as_mut().reverse();
    }
}
