#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod hash;
#[cfg(feature = "traits")]
pub mod option;
#[cfg(test)]
pub mod panic;
pub mod trace;
