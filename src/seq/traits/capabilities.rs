//! Optional capabilities. Each one is a separate trait so adaptors can forward
//! exactly what their base provides.
use super::Sequence;
use crate::markers::{Infinite, KnownSize, Multipass};
use crate::Distance;
use std::slice;

/// Cursors can be saved and traversal restarted from them.
/// Saved cursors compare equal when they designate the same position.
pub trait MultipassSequence: Sequence<Pass = Multipass, Cursor: Clone + Eq> {}

/// We can step backward.
pub trait BidirectionalSequence: MultipassSequence {
    /// Move one element backward.
    fn dec(&mut self, cursor: &mut Self::Cursor);
}

/// We can jump by any offset and compute distances in constant time.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Move `offset` elements forward (backward if negative).
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: Distance);
    /// Number of elements from `from` to `to`.
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> Distance;
}

/// Number of elements is known without traversal.
pub trait SizedSequence: Sequence<Extent = KnownSize> {
    /// Number of elements.
    fn size(&self) -> Distance;
}

/// The sequence never ends: `is_last` is always false.
pub trait InfiniteSequence: Sequence<Extent = Infinite> {
    /// Move `offset` elements forward. Random access infinite sequences should
    /// override this with a jump.
    fn advance(&mut self, cursor: &mut Self::Cursor, offset: Distance) {
        for _ in 0..offset {
            self.inc(cursor)
        }
    }
}

/// We can get a cursor at the end without traversing.
pub trait BoundedSequence: Sequence {
    /// Cursor one past the last element.
    fn last(&mut self) -> Self::Cursor;
}

/// Elements can be moved out from the sequence.
pub trait MoveSequence: Sequence {
    /// Owned elements.
    type Value;
    /// Take the element at given position out. Sequences over shared data clone it.
    fn move_at(&mut self, cursor: &Self::Cursor) -> Self::Value;
    /// Same as `move_at`, without bounds checks.
    ///
    /// # Safety
    ///
    /// The cursor must be a valid position which is not at the end.
    unsafe fn move_at_unchecked(&mut self, cursor: &Self::Cursor) -> Self::Value {
        self.move_at(cursor)
    }
}

/// Elements are stored in memory, one after the other.
///
/// # Safety
///
/// `data` must point to `size()` initialized elements, the one at `first()` coming first,
/// valid as long as the sequence is borrowed.
pub unsafe trait ContiguousSequence: RandomAccessSequence + SizedSequence {
    /// Type of stored elements.
    type Item;
    /// Pointer to the first element.
    fn data(&self) -> *const Self::Item;
    /// All elements as a slice.
    fn as_slice(&self) -> &[Self::Item] {
        // `size` is never negative
        unsafe { slice::from_raw_parts(self.data(), self.size() as usize) }
    }
}
