//! A mutable reference to a sequence is a sequence too.
//! This enables truncating a sequence we do not own.
use crate::prelude::*;
use crate::Distance;

impl<'a, S: Sequence + ?Sized> Sequence for &'a mut S {
    type Cursor = S::Cursor;
    type Element = S::Element;
    type Pass = S::Pass;
    type Extent = S::Extent;

    fn first(&mut self) -> Self::Cursor {
        (**self).first()
    }
    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        (**self).is_last(cursor)
    }
    fn inc(&mut self, cursor: &mut Self::Cursor) {
        (**self).inc(cursor)
    }
    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        (**self).read_at(cursor)
    }
    unsafe fn read_at_unchecked(&self, cursor: &Self::Cursor) -> Self::Element {
        (**self).read_at_unchecked(cursor)
    }
    fn for_each_while<P>(&mut self, predicate: P) -> Self::Cursor
    where
        P: FnMut(Self::Element) -> bool,
    {
        (**self).for_each_while(predicate)
    }
}

impl<'a, S: MultipassSequence + ?Sized> MultipassSequence for &'a mut S {}

impl<'a, S: BidirectionalSequence + ?Sized> BidirectionalSequence for &'a mut S {
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        (**self).dec(cursor)
    }
}

impl<'a, S: RandomAccessSequence + ?Sized> RandomAccessSequence for &'a mut S {
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: Distance) {
        (**self).inc_by(cursor, offset)
    }
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        (**self).distance(from, to)
    }
}

impl<'a, S: SizedSequence + ?Sized> SizedSequence for &'a mut S {
    fn size(&self) -> Distance {
        (**self).size()
    }
}

impl<'a, S: InfiniteSequence + ?Sized> InfiniteSequence for &'a mut S {
    fn advance(&mut self, cursor: &mut Self::Cursor, offset: Distance) {
        (**self).advance(cursor, offset)
    }
}

impl<'a, S: BoundedSequence + ?Sized> BoundedSequence for &'a mut S {
    fn last(&mut self) -> Self::Cursor {
        (**self).last()
    }
}

impl<'a, S: MoveSequence + ?Sized> MoveSequence for &'a mut S {
    type Value = S::Value;
    fn move_at(&mut self, cursor: &Self::Cursor) -> Self::Value {
        (**self).move_at(cursor)
    }
    unsafe fn move_at_unchecked(&mut self, cursor: &Self::Cursor) -> Self::Value {
        (**self).move_at_unchecked(cursor)
    }
}

unsafe impl<'a, S: ContiguousSequence + ?Sized> ContiguousSequence for &'a mut S {
    type Item = S::Item;
    fn data(&self) -> *const Self::Item {
        (**self).data()
    }
}
