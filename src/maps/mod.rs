//! Higher-order operations over [`HashMap`](std::collections::HashMap)s.
//!
//! Every function here takes its map as an `Option<&HashMap<K, V, S>>`, where `None` stands for an
//! absent map. New maps are built with a clone of the input's hasher, so a map using a custom
//! [`BuildHasher`](std::hash::BuildHasher) keeps using it.
//!
//! Maps are unordered, so the order in which callbacks are invoked, the order of extracted keys
//! and values, and which key wins an inversion collision are all unspecified.
#![warn(missing_docs)]

mod invert;
mod search;
mod transform;

pub use invert::*;
pub use search::*;
pub use transform::*;
