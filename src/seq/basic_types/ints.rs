//! Infinite sequence of consecutive integers.
use crate::markers::{Infinite, Multipass};
use crate::num::{checked_add, checked_sub};
use crate::prelude::*;
use crate::Distance;

/// All integers from `start` on. Cursors are offsets from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ints {
    start: Distance,
}

/// Count up from `start`, forever.
///
/// # Example
///
/// ```
/// use sequence_adaptive::prelude::*;
/// use sequence_adaptive::ints;
/// let mut t = ints(10).take(4);
/// assert_eq!(t.to_vec(), vec![10, 11, 12, 13]);
/// assert_eq!(t.size(), 4);
/// ```
pub fn ints(start: Distance) -> Ints {
    Ints { start }
}

impl Sequence for Ints {
    type Cursor = Distance;
    type Element = Distance;
    type Pass = Multipass;
    type Extent = Infinite;

    fn first(&mut self) -> Distance {
        0
    }
    fn is_last(&self, _cursor: &Distance) -> bool {
        false
    }
    fn inc(&mut self, cursor: &mut Distance) {
        *cursor = checked_add(*cursor, 1)
    }
    fn read_at(&self, cursor: &Distance) -> Distance {
        checked_add(self.start, *cursor)
    }
}

impl MultipassSequence for Ints {}

impl BidirectionalSequence for Ints {
    fn dec(&mut self, cursor: &mut Distance) {
        *cursor = checked_sub(*cursor, 1)
    }
}

impl RandomAccessSequence for Ints {
    fn inc_by(&mut self, cursor: &mut Distance, offset: Distance) {
        *cursor = checked_add(*cursor, offset)
    }
    fn distance(&self, from: &Distance, to: &Distance) -> Distance {
        checked_sub(*to, *from)
    }
}

impl InfiniteSequence for Ints {
    fn advance(&mut self, cursor: &mut Distance, offset: Distance) {
        self.inc_by(cursor, offset)
    }
}

impl MoveSequence for Ints {
    type Value = Distance;
    fn move_at(&mut self, cursor: &Distance) -> Distance {
        self.read_at(cursor)
    }
}
