pub use crate::seq::{
    BidirectionalSequence, BoundedSequence, ContiguousSequence, InfiniteSequence,
    MoveSequence, MultipassSequence, RandomAccessSequence, Sequence, SizedSequence,
};
