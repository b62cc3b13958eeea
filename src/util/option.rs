pub(crate) trait OptionExtension<T> {
    fn present(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch. Used where
    /// an operation was handed a present collection, so an absent result is impossible.
    ///
    /// No panics annotation is used because the whole semantics are that None can't happen here.
    fn present(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("present input produced an absent result"),
        }
    }
}
