use crate::slices;
use crate::util::option::OptionExtension;

/// Method forms of the [`slices`] operations for a slice that is known to be present.
///
/// There's no method for a shallow copy or in-place reversal, [`<[T]>::to_vec`](slice::to_vec) and
/// [`<[T]>::reverse`](slice::reverse) already cover those.
///
/// # Examples
/// ```
/// # use collection_ops::traits::SliceOps;
/// let mut digits = vec![1, 2, 3, 4, 5];
/// assert_eq!(digits.chunked(2), [vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(digits.find_index_from(|v| v % 2 == 0, 2), Some(3));
///
/// digits.fill_range(0, 1, 3).reverse();
/// assert_eq!(digits, [5, 4, 0, 0, 1]);
/// ```
pub trait SliceOps<T> {
    /// See [`slices::map`].
    fn map_indexed<U>(&self, convert: impl FnMut(&T, usize, &[T]) -> U) -> Vec<U>;

    /// See [`slices::filter`].
    fn filter_indexed(&self, filter: impl FnMut(&T, usize, &[T]) -> bool) -> Vec<T>
    where
        T: Clone;

    /// See [`slices::reduce`].
    fn reduce_indexed<A>(&self, reduce: impl FnMut(A, &T, usize) -> A, acc: A) -> A;

    /// See [`slices::for_each`].
    fn for_each_indexed(&self, f: impl FnMut(&T, usize));

    /// See [`slices::chunk`], including the single empty group for an empty slice.
    fn chunked(&self, size: isize) -> Vec<Vec<T>>
    where
        T: Clone;

    /// See [`slices::fill`]. Returns `self` to allow chaining.
    fn fill_range(&mut self, value: T, start: isize, end: isize) -> &mut Self
    where
        T: Clone;

    /// See [`slices::find_index`].
    fn find_index_from(&self, predicate: impl FnMut(&T) -> bool, from: isize) -> Option<usize>;

    /// See [`slices::remove`]. Returns `(kept, removed)`.
    fn partition_removed(&self, predicate: impl FnMut(&T, usize) -> bool) -> (Vec<T>, Vec<T>)
    where
        T: Clone;
}

impl<T> SliceOps<T> for [T] {
    fn map_indexed<U>(&self, convert: impl FnMut(&T, usize, &[T]) -> U) -> Vec<U> {
        slices::map(Some(self), convert).present()
    }

    fn filter_indexed(&self, filter: impl FnMut(&T, usize, &[T]) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        slices::filter(Some(self), filter).present()
    }

    fn reduce_indexed<A>(&self, reduce: impl FnMut(A, &T, usize) -> A, acc: A) -> A {
        slices::reduce(Some(self), reduce, acc)
    }

    fn for_each_indexed(&self, f: impl FnMut(&T, usize)) {
        slices::for_each(Some(self), f)
    }

    fn chunked(&self, size: isize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        slices::chunk(Some(self), size).present()
    }

    fn fill_range(&mut self, value: T, start: isize, end: isize) -> &mut Self
    where
        T: Clone,
    {
        slices::fill(Some(&mut *self), value, start, end);
        self
    }

    fn find_index_from(&self, predicate: impl FnMut(&T) -> bool, from: isize) -> Option<usize> {
        slices::find_index(Some(self), predicate, Some(from))
    }

    fn partition_removed(&self, predicate: impl FnMut(&T, usize) -> bool) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
    {
        let (kept, removed) = slices::remove(Some(self), predicate);
        (kept.present(), removed.present())
    }
}
