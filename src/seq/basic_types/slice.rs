//! Slices are sequences with every capability.
//! Cursors are indices.
use crate::error::{fatal, Error};
use crate::markers::{KnownSize, Multipass};
use crate::num::{checked_add, checked_cast, checked_sub};
use crate::prelude::*;
use crate::Distance;

#[track_caller]
fn checked_index(position: Distance, len: usize) -> usize {
    if position < 0 || position as usize >= len {
        fatal(Error::OutOfBounds {
            position,
            len: checked_cast(len),
        })
    }
    position as usize
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor = Distance;
    type Element = &'a T;
    type Pass = Multipass;
    type Extent = KnownSize;

    fn first(&mut self) -> Distance {
        0
    }
    fn is_last(&self, cursor: &Distance) -> bool {
        *cursor >= self.size()
    }
    fn inc(&mut self, cursor: &mut Distance) {
        *cursor = checked_add(*cursor, 1)
    }
    fn read_at(&self, cursor: &Distance) -> &'a T {
        let slice: &'a [T] = *self;
        &slice[checked_index(*cursor, slice.len())]
    }
    unsafe fn read_at_unchecked(&self, cursor: &Distance) -> &'a T {
        let slice: &'a [T] = *self;
        debug_assert!(*cursor >= 0 && (*cursor as usize) < slice.len());
        slice.get_unchecked(*cursor as usize)
    }
    fn for_each_while<P>(&mut self, mut predicate: P) -> Distance
    where
        P: FnMut(Self::Element) -> bool,
    {
        let slice: &'a [T] = *self;
        let stop = slice
            .iter()
            .position(|e| !predicate(e))
            .unwrap_or(slice.len());
        checked_cast(stop)
    }
}

impl<'a, T> MultipassSequence for &'a [T] {}

impl<'a, T> BidirectionalSequence for &'a [T] {
    fn dec(&mut self, cursor: &mut Distance) {
        *cursor = checked_sub(*cursor, 1)
    }
}

impl<'a, T> RandomAccessSequence for &'a [T] {
    fn inc_by(&mut self, cursor: &mut Distance, offset: Distance) {
        *cursor = checked_add(*cursor, offset)
    }
    fn distance(&self, from: &Distance, to: &Distance) -> Distance {
        checked_sub(*to, *from)
    }
}

impl<'a, T> SizedSequence for &'a [T] {
    fn size(&self) -> Distance {
        checked_cast(self.len())
    }
}

impl<'a, T> BoundedSequence for &'a [T] {
    fn last(&mut self) -> Distance {
        self.size()
    }
}

impl<'a, T: Clone> MoveSequence for &'a [T] {
    type Value = T;
    fn move_at(&mut self, cursor: &Distance) -> T {
        self.read_at(cursor).clone()
    }
    unsafe fn move_at_unchecked(&mut self, cursor: &Distance) -> T {
        self.read_at_unchecked(cursor).clone()
    }
}

unsafe impl<'a, T> ContiguousSequence for &'a [T] {
    type Item = T;
    fn data(&self) -> *const T {
        self.as_ptr()
    }
}
