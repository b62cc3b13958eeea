//! Higher-order operations over slices.
//!
//! Functions that only read take their sequence as `Option<C>` where `C: AsRef<[T]>`, so a `&Vec`,
//! a `&[T]` or an array can all be passed straight in (wrapped in [`Some`]). Functions that mutate
//! take `Option<C>` where `C: AsMut<[T]>`, usually a `&mut Vec` or `&mut [T]`. `None` stands for an
//! absent sequence and always propagates.
//!
//! Indices that come from the caller as bounds (chunk size, fill range, search start) are signed
//! and get clamped into the sequence rather than rejected. [`try_fill`] is the strict exception.
#![warn(missing_docs)]

mod bounds;
mod chunk;
mod error;
mod fill;
mod search;
mod transform;

pub use chunk::*;
pub use error::*;
pub use fill::*;
pub use search::*;
pub use transform::*;
