//! Any rust iterator is a single pass sequence.
//! The current element is stored inside the sequence, cursors only count steps.
//! Elements are pulled on demand: nothing is taken from the iterator until someone
//! asks whether we reached the end or reads.
use crate::error::{fatal, Error};
use crate::markers::{SinglePass, UnknownSize};
use crate::num::checked_add;
use crate::prelude::*;
use crate::Distance;
use std::cell::{Cell, RefCell};

/// Single pass sequence pulling its elements from an iterator.
pub struct FromIter<I: Iterator> {
    iterator: RefCell<I>,
    current: RefCell<Option<I::Item>>,
    filled: Cell<bool>,
    exhausted: Cell<bool>,
}

/// Cursor on a `FromIter`. It cannot be copied: there is only one way through.
#[derive(Debug, PartialEq, Eq)]
pub struct FromIterCursor {
    position: Distance,
}

impl FromIterCursor {
    /// Number of steps taken since `first`.
    pub fn position(&self) -> Distance {
        self.position
    }
}

/// Turn an iterator into a single pass sequence.
/// The element under the cursor is pulled the first time it is needed.
///
/// # Example
///
/// ```
/// use sequence_adaptive::prelude::*;
/// use sequence_adaptive::from_iter;
/// let mut s = from_iter("abc".chars()).take(2);
/// assert_eq!(s.to_vec(), vec!['a', 'b']);
/// ```
pub fn from_iter<T: IntoIterator>(iterable: T) -> FromIter<T::IntoIter> {
    FromIter {
        iterator: RefCell::new(iterable.into_iter()),
        current: RefCell::new(None),
        filled: Cell::new(false),
        exhausted: Cell::new(false),
    }
}

impl<I: Iterator> FromIter<I> {
    fn fill(&self) {
        if !self.filled.get() {
            let next = self.iterator.borrow_mut().next();
            self.exhausted.set(next.is_none());
            *self.current.borrow_mut() = next;
            self.filled.set(true);
        }
    }
    /// Give back what is left of the iterator.
    /// The current element, if it was already pulled, is lost.
    pub fn into_inner(self) -> I {
        self.iterator.into_inner()
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Cursor = FromIterCursor;
    type Element = I::Item;
    type Pass = SinglePass;
    type Extent = UnknownSize;

    fn first(&mut self) -> FromIterCursor {
        FromIterCursor { position: 0 }
    }
    fn is_last(&self, _cursor: &FromIterCursor) -> bool {
        self.fill();
        self.exhausted.get()
    }
    /// Skips the current element, the next one is pulled when needed.
    fn inc(&mut self, cursor: &mut FromIterCursor) {
        self.fill();
        self.filled.set(false);
        cursor.position = checked_add(cursor.position, 1);
    }
    fn read_at(&self, _cursor: &FromIterCursor) -> I::Item {
        self.fill();
        self.current
            .borrow()
            .clone()
            .unwrap_or_else(|| fatal(Error::Exhausted))
    }
}

impl<I> MoveSequence for FromIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Value = I::Item;
    /// The element is moved out, reading it again is fatal.
    fn move_at(&mut self, _cursor: &FromIterCursor) -> I::Item {
        self.fill();
        self.current
            .get_mut()
            .take()
            .unwrap_or_else(|| fatal(Error::Exhausted))
    }
}
