/// Clamps a signed `index` into `0..=len`.
pub(crate) fn clamp_index(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |index| index.min(len))
}

/// Returns true if a signed `index` lies past `len`. Negative indices never do.
pub(crate) fn is_past(index: isize, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|index| index > len)
}
