//! Extension traits exposing the [`maps`](crate::maps) and [`slices`](crate::slices) operations as
//! methods.
//!
//! # Purpose
//! The free functions deal in `Option`s so that absent collections propagate. When a collection is
//! already in hand that wrapping is just noise, so these traits call through with `Some(self)` and
//! unwrap the (always present) result.
//!
//! Method names avoid clashing with the inherent methods of [`HashMap`](std::collections::HashMap)
//! and slices, hence `map_values` rather than `map`, `chunked` rather than `chunks` and so on.
#![warn(missing_docs)]

#[cfg(feature = "maps")]
mod map_ops;
#[cfg(feature = "slices")]
mod slice_ops;

#[cfg(feature = "maps")]
pub use map_ops::MapOps;
#[cfg(feature = "slices")]
pub use slice_ops::SliceOps;
