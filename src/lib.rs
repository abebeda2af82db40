//! This crate provides lazy sequence adaptors driven by cursors.
//!
//! A sequence is traversed through cursors: `first` gives a starting position,
//! `is_last` tells us if we reached the end, `inc` moves forward and `read_at` extracts
//! the element. Stronger capabilities (multipass, bidirectional, random access, sized,
//! infinite, contiguous) are separate traits and adaptors only forward the ones
//! their base has.
//!
//! # Example
//!
//! ```
//! use sequence_adaptive::prelude::*;
//! use sequence_adaptive::{ints, take};
//! let v = vec![1, 2, 3, 4, 5];
//! let firsts: Vec<_> = take(&v[..], 3).to_vec();
//! assert_eq!(firsts, vec![&1, &2, &3]);
//! assert_eq!(ints(10).take(4u8).to_vec(), vec![10, 11, 12, 13]);
//! ```
#![warn(clippy::all)]
#![deny(missing_docs)]

#[macro_use]
mod logs;

/// Errors reported by the crate. They are all fatal.
pub mod error;
pub use error::Error;
/// Marker types for compile time specialisation.
pub mod markers;
/// Checked arithmetic on distances.
pub mod num;
/// Import all traits in prelude to enable sequence methods.
pub mod prelude;
/// Sequences, their capabilities and adaptors.
pub mod seq;
pub use seq::{from_iter, ints, take, SeqIter, Take};

/// Signed type used for all positions, counts and distances.
pub type Distance = isize;
