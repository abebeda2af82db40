//! Sources of elements: slices, integers, rust iterators.
mod by_ref;
mod from_iter;
pub use from_iter::{from_iter, FromIter, FromIterCursor};
mod ints;
pub use ints::{ints, Ints};
mod slice;
