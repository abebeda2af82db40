use crate::markers::{Extent, Pass};
use crate::num::{checked_add, Integral};
use crate::seq::Take;
use crate::Distance;

/// The minimal traversal protocol. All sequences must at least implement this trait.
///
/// A traversal starts with `first`, reads elements with `read_at` and moves forward
/// with `inc` until `is_last` returns true.
/// Cursors are plain values, they hold no reference to the sequence.
pub trait Sequence {
    /// Opaque position in the sequence.
    type Cursor;
    /// What `read_at` gives us. References for sequences over borrowed data,
    /// values for generated ones.
    type Element;
    /// `Multipass` or `SinglePass`.
    type Pass: Pass;
    /// `UnknownSize`, `KnownSize` or `Infinite`.
    type Extent: Extent;

    /// Cursor at the start of the sequence.
    fn first(&mut self) -> Self::Cursor;
    /// Is the cursor at the end ?
    fn is_last(&self, cursor: &Self::Cursor) -> bool;
    /// Move one element forward.
    fn inc(&mut self, cursor: &mut Self::Cursor);
    /// Element at given position. The cursor must not be at the end.
    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element;
    /// Element at given position, without bounds checks.
    ///
    /// # Safety
    ///
    /// The cursor must be a valid position which is not at the end.
    unsafe fn read_at_unchecked(&self, cursor: &Self::Cursor) -> Self::Element {
        self.read_at(cursor)
    }

    /// Traverse the sequence from the start as long as `predicate` returns true.
    /// Return the cursor where we stopped: either the element the predicate refused
    /// or the end.
    ///
    /// # Example
    ///
    /// ```
    /// use sequence_adaptive::prelude::*;
    /// let mut s = &[1, 2, 3, 4][..];
    /// let stop = s.for_each_while(|e| *e < 3);
    /// assert_eq!(s.read_at(&stop), &3);
    /// ```
    fn for_each_while<P>(&mut self, mut predicate: P) -> Self::Cursor
    where
        P: FnMut(Self::Element) -> bool,
    {
        let mut cursor = self.first();
        while !self.is_last(&cursor) {
            if !predicate(self.read_at(&cursor)) {
                break;
            }
            self.inc(&mut cursor);
        }
        cursor
    }

    /// Call `op` on each element.
    fn for_each<F>(&mut self, mut op: F)
    where
        F: FnMut(Self::Element),
    {
        self.for_each_while(|e| {
            op(e);
            true
        });
    }

    /// Number of elements, obtained by traversing the whole sequence.
    fn count(&mut self) -> Distance {
        let mut count = 0;
        self.for_each(|_| count = checked_add(count, 1));
        count
    }

    /// Collect all elements.
    fn to_vec(&mut self) -> Vec<Self::Element> {
        let mut elements = Vec::new();
        self.for_each(|e| elements.push(e));
        elements
    }

    /// Keep at most `count` elements. See `take` for details.
    ///
    /// # Example
    ///
    /// ```
    /// use sequence_adaptive::prelude::*;
    /// let v = [5, 6, 7, 8];
    /// assert_eq!((&v[..]).take(2).count(), 2);
    /// assert_eq!((&v[..]).take(20usize).count(), 4);
    /// ```
    fn take<C: Integral>(self, count: C) -> Take<Self>
    where
        Self: Sized,
    {
        crate::seq::take(self, count)
    }
}
