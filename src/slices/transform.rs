/// Creates a new [`Vec`] by applying `convert(elem, index, input)` to every element of `input`, in
/// order. The output always has the same length as the input.
///
/// Returns None if `input` is absent.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let ints = vec![1, 2, 3, 4];
/// assert_eq!(
///     slices::map(Some(&ints), |i, _, _| i.to_string()),
///     Some(vec!["1".to_string(), "2".into(), "3".into(), "4".into()])
/// );
/// assert_eq!(slices::map(Some(&ints), |i, _, _| i + i), Some(vec![2, 4, 6, 8]));
/// ```
pub fn map<T, U, C, F>(input: Option<C>, mut convert: F) -> Option<Vec<U>>
where
    C: AsRef<[T]>,
    F: FnMut(&T, usize, &[T]) -> U,
{
    let input = input?;
    let slice = input.as_ref();

    Some(
        slice
            .iter()
            .enumerate()
            .map(|(index, elem)| convert(elem, index, slice))
            .collect(),
    )
}

/// Creates a new [`Vec`] holding the elements of `input` for which `filter(elem, index, input)`
/// returns true, keeping their order.
///
/// Returns None if `input` is absent.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let strs = ["a", "b", "c", "d"];
/// let kept = slices::filter(Some(strs), |s, pos, _| *s == "a" || pos == 3);
/// assert_eq!(kept, Some(vec!["a", "d"]));
/// ```
pub fn filter<T, C, F>(input: Option<C>, mut filter: F) -> Option<Vec<T>>
where
    T: Clone,
    C: AsRef<[T]>,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let input = input?;
    let slice = input.as_ref();

    let mut out = Vec::with_capacity(slice.len());
    for (index, elem) in slice.iter().enumerate() {
        if filter(elem, index, slice) {
            out.push(elem.clone());
        }
    }

    Some(out)
}

/// Folds the elements of `input` into `acc` from left to right using `reduce(acc, elem, index)`.
///
/// If `input` is absent, `acc` is returned untouched.
///
/// # Examples
/// ```
/// # use collection_ops::slices;
/// let joined = slices::reduce(Some([1, 2, 3, 4]), |acc: String, v, _| {
///     if acc.is_empty() { v.to_string() } else { format!("{acc}, {v}") }
/// }, String::new());
/// assert_eq!(joined, "1, 2, 3, 4");
/// ```
pub fn reduce<T, C, A, F>(input: Option<C>, mut reduce: F, acc: A) -> A
where
    C: AsRef<[T]>,
    F: FnMut(A, &T, usize) -> A,
{
    match input {
        Some(input) => input
            .as_ref()
            .iter()
            .enumerate()
            .fold(acc, |acc, (index, elem)| reduce(acc, elem, index)),
        None => acc,
    }
}

/// Calls `f(elem, index)` for every element of `input`, in order. Does nothing if `input` is
/// absent.
pub fn for_each<T, C, F>(input: Option<C>, mut f: F)
where
    C: AsRef<[T]>,
    F: FnMut(&T, usize),
{
    let Some(input) = input else { return };

    for (index, elem) in input.as_ref().iter().enumerate() {
        f(elem, index);
    }
}

/// Creates a shallow copy of `input` with its own backing storage. Pushing to or assigning into the
/// copy doesn't affect `input`, but elements are only [`Clone`]d, not deep copied.
///
/// Returns None if `input` is absent.
pub fn copy<T: Clone, C: AsRef<[T]>>(input: Option<C>) -> Option<Vec<T>> {
    input.map(|input| input.as_ref().to_vec())
}
