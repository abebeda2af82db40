//! All traits related to sequences:
//! - Sequence
//! - MultipassSequence
//! - ...
mod capabilities;
mod sequence;

pub use capabilities::{
    BidirectionalSequence, BoundedSequence, ContiguousSequence, InfiniteSequence,
    MoveSequence, MultipassSequence, RandomAccessSequence, SizedSequence,
};
pub use sequence::Sequence;
