/// Emits a `trace` level event when the `tracing` feature is enabled, otherwise expands to nothing.
/// Accepts anything [`tracing::trace!`](https://docs.rs/tracing/latest/tracing/macro.trace.html)
/// does.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

#[allow(unused_imports)]
pub(crate) use trace;
