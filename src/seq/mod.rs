//! Sequences and their adaptors.
mod traits;
pub use traits::{
    BidirectionalSequence, BoundedSequence, ContiguousSequence, InfiniteSequence,
    MoveSequence, MultipassSequence, RandomAccessSequence, Sequence, SizedSequence,
};
mod adaptors;
pub use adaptors::{take, Take, TakeCursor};
mod basic_types;
pub use basic_types::{from_iter, ints, FromIter, FromIterCursor, Ints};
mod iter;
pub use iter::SeqIter;
