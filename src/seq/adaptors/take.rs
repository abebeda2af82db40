//! Truncate a sequence to its first elements.
//!
//! `Take` keeps every capability of its base it can honestly keep and is always sized
//! when the base is sized or infinite.
//!
//! Its cursor pairs the base cursor with the number of elements still allowed. The view
//! ends when this budget is exhausted or when the base ends, whichever comes first.
use crate::error::{fatal, Error};
use crate::markers::{Clamp, Extent, Pass, Reach};
use crate::num::{checked_add, checked_cast, checked_sub, Integral};
use crate::prelude::*;
use crate::Distance;
use std::cmp::min;

/// Sequence of the first `count` elements of `base`.
#[derive(Debug, Clone)]
pub struct Take<B> {
    base: B,
    count: Distance,
}

/// Cursor on a `Take`.
/// Two cursors are equal when both their base cursors and remaining lengths are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TakeCursor<C> {
    base_cursor: C,
    length: Distance,
}

impl<C> TakeCursor<C> {
    /// Position in the base sequence.
    pub fn base(&self) -> &C {
        &self.base_cursor
    }
    /// Number of elements we are still allowed to traverse. At or below 0 we are at the end.
    pub fn length(&self) -> Distance {
        self.length
    }
}

/// Keep at most `count` elements of `sequence`.
/// Nothing is traversed here, `sequence` is just moved inside the adaptor.
///
/// This panics if `count` is negative.
///
/// # Example
///
/// ```
/// use sequence_adaptive::prelude::*;
/// use sequence_adaptive::take;
/// let v = vec![1, 2, 3, 4, 5];
/// let mut t = take(&v[..], 3);
/// assert_eq!(t.size(), 3);
/// assert_eq!(t.to_vec(), vec![&1, &2, &3]);
/// ```
///
/// ```should_panic
/// use sequence_adaptive::take;
/// let v = vec![1, 2, 3];
/// take(&v[..], -1);
/// ```
#[track_caller]
pub fn take<S: Sequence, C: Integral>(sequence: S, count: C) -> Take<S> {
    let count = checked_cast(count);
    if count < 0 {
        fatal(Error::NegativeCount(count));
    }
    log_trace!(count = count, "take");
    Take {
        base: sequence,
        count,
    }
}

impl<B> Take<B> {
    /// The underlying sequence.
    pub fn base(&self) -> &B {
        &self.base
    }
    /// Give back the underlying sequence.
    pub fn into_base(self) -> B {
        self.base
    }
    /// Maximal number of elements.
    pub fn limit(&self) -> Distance {
        self.count
    }
}

impl<B: Sequence> Sequence for Take<B> {
    type Cursor = TakeCursor<B::Cursor>;
    type Element = B::Element;
    type Pass = B::Pass;
    type Extent = <B::Extent as Extent>::Truncated;

    fn first(&mut self) -> Self::Cursor {
        TakeCursor {
            base_cursor: self.base.first(),
            length: self.count,
        }
    }

    fn is_last(&self, cursor: &Self::Cursor) -> bool {
        cursor.length <= 0 || self.base.is_last(&cursor.base_cursor)
    }

    fn inc(&mut self, cursor: &mut Self::Cursor) {
        cursor.length = checked_sub(cursor.length, 1);
        // a single pass base must not be stepped further than what we expose
        if <B::Pass as Pass>::MULTIPASS || cursor.length > 0 {
            self.base.inc(&mut cursor.base_cursor)
        }
    }

    fn read_at(&self, cursor: &Self::Cursor) -> Self::Element {
        self.base.read_at(&cursor.base_cursor)
    }

    unsafe fn read_at_unchecked(&self, cursor: &Self::Cursor) -> Self::Element {
        self.base.read_at_unchecked(&cursor.base_cursor)
    }

    /// # Example
    ///
    /// ```
    /// use sequence_adaptive::prelude::*;
    /// use sequence_adaptive::take;
    /// let v = vec![1, 2, 3, 4, 5];
    /// let mut t = take(&v[..], 3);
    /// let mut seen = Vec::new();
    /// let stop = t.for_each_while(|e| {
    ///     seen.push(*e);
    ///     true
    /// });
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// assert!(t.is_last(&stop));
    /// ```
    fn for_each_while<P>(&mut self, mut predicate: P) -> Self::Cursor
    where
        P: FnMut(Self::Element) -> bool,
    {
        let mut length = self.count;
        if length == 0 {
            log_trace!("take of 0 elements, base not traversed");
            return self.first();
        }
        let mut base_cursor = self.base.for_each_while(|e| {
            predicate(e) && {
                length = checked_sub(length, 1);
                length > 0
            }
        });
        // we stopped because of the count: step like `inc` would
        if <B::Pass as Pass>::MULTIPASS && length == 0 {
            self.base.inc(&mut base_cursor);
        }
        TakeCursor {
            base_cursor,
            length,
        }
    }
}

impl<B: MultipassSequence> MultipassSequence for Take<B> {}

impl<B: BidirectionalSequence> BidirectionalSequence for Take<B> {
    fn dec(&mut self, cursor: &mut Self::Cursor) {
        cursor.length = checked_add(cursor.length, 1);
        self.base.dec(&mut cursor.base_cursor)
    }
}

impl<B: RandomAccessSequence> RandomAccessSequence for Take<B> {
    fn inc_by(&mut self, cursor: &mut Self::Cursor, offset: Distance) {
        cursor.length = checked_sub(cursor.length, offset);
        self.base.inc_by(&mut cursor.base_cursor, offset)
    }
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        min(
            self.base.distance(&from.base_cursor, &to.base_cursor),
            checked_sub(from.length, to.length),
        )
    }
}

impl<B> SizedSequence for Take<B>
where
    B: Sequence,
    B::Extent: Clamp<B>,
{
    /// # Example
    ///
    /// ```
    /// use sequence_adaptive::prelude::*;
    /// use sequence_adaptive::{ints, take};
    /// assert_eq!(take(&[1, 2][..], 5).size(), 2);
    /// assert_eq!(take(ints(0), 5).size(), 5);
    /// ```
    ///
    /// Only sized or infinite bases have a size.
    ///
    /// ```compile_fail
    /// use sequence_adaptive::prelude::*;
    /// use sequence_adaptive::{from_iter, take};
    /// take(from_iter(0..3), 2).size();
    /// ```
    fn size(&self) -> Distance {
        <B::Extent as Clamp<B>>::clamp(&self.base, self.count)
    }
}

impl<B> BoundedSequence for Take<B>
where
    B: Sequence,
    B::Extent: Reach<B>,
{
    /// The base is advanced by `size()`. This is the cursor obtained by stepping
    /// forward `size()` times from `first()`.
    ///
    /// Its remaining length is `count - size()`: zero when the base holds at least
    /// `count` elements, positive when the base ends first.
    fn last(&mut self) -> Self::Cursor {
        let size = self.size();
        let mut base_cursor = self.base.first();
        <B::Extent as Reach<B>>::reach(&mut self.base, &mut base_cursor, size);
        TakeCursor {
            base_cursor,
            length: checked_sub(self.count, size),
        }
    }
}

unsafe impl<B> ContiguousSequence for Take<B>
where
    B: ContiguousSequence,
    B::Extent: Clamp<B>,
{
    type Item = B::Item;
    fn data(&self) -> *const Self::Item {
        self.base.data()
    }
}

impl<B: MoveSequence> MoveSequence for Take<B> {
    type Value = B::Value;
    fn move_at(&mut self, cursor: &Self::Cursor) -> Self::Value {
        self.base.move_at(&cursor.base_cursor)
    }
    unsafe fn move_at_unchecked(&mut self, cursor: &Self::Cursor) -> Self::Value {
        self.base.move_at_unchecked(&cursor.base_cursor)
    }
}
