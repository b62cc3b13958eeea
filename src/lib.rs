//! This crate is a small set of higher-order helpers for working with maps and slices, the kind of
//! thing I kept rewriting in every project (map, filter, reduce, chunk, invert and friends).
//!
//! # Purpose
//! None of these operations are hard on their own. The point is to have one place where their edge
//! cases are decided once: what happens with an absent collection, with a chunk size of zero, or
//! with a fill range that runs off the end of a slice.
//!
//! # Absent vs Empty
//! Every operation distinguishes between an absent collection (`None`) and an empty one
//! (`Some(empty)`). Absent input propagates as absent output, while empty input produces empty
//! output. For example, [`slices::map`] over `None` returns `None`, but over an empty slice returns
//! `Some(vec![])`. Folds over absent input just hand back the initial accumulator.
//!
//! If you already have a collection in hand, the extension traits in [`traits`] expose the same
//! operations as methods without the [`Option`] wrapping.
//!
//! # Ordering
//! Maps are treated as unordered. Anything that walks a map ([`maps::keys`], [`maps::reduce`],
//! [`maps::find_key`], ...) does so in whatever order the map iterates, and collisions in
//! [`maps::invert`] are resolved by that same order. Don't rely on it.
//!
//! # Error Handling
//! The lenient operations are total: bounds are clamped, bad ranges are ignored and "not found" is
//! a [`None`]. Where a caller would rather hear about bad bounds, there's a strict variant
//! ([`slices::try_fill`]) returning a strongly typed error enum.
//!
//! Callbacks are trusted. If a callback panics, the panic propagates straight through and any
//! in-place mutation done before it stays done.
//!
//! # Features
//! - `maps`: the [`maps`] module.
//! - `slices`: the [`slices`] module.
//! - `traits`: extension traits for whichever of the above are enabled.
//! - `ops-all` (default): all of the above.
//! - `tracing`: emits `trace` level events whenever an operation clamps or ignores its input.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "maps")]
pub mod maps;
#[cfg(feature = "slices")]
pub mod slices;
#[cfg(feature = "traits")]
pub mod traits;

pub(crate) mod util;
