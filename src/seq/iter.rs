//! Sequences can be traversed with rust's `for` loops.
use crate::prelude::*;
use crate::seq::{FromIter, Ints, Take};

/// Rust iterator traversing a sequence from its start.
///
/// # Example
///
/// ```
/// use sequence_adaptive::{ints, SeqIter};
/// use sequence_adaptive::prelude::*;
/// let total: isize = SeqIter::new(ints(1).take(4)).sum();
/// assert_eq!(total, 10);
/// for (i, e) in ints(5).take(3).into_iter().enumerate() {
///     assert_eq!(e, i as isize + 5);
/// }
/// ```
pub struct SeqIter<S: Sequence> {
    sequence: S,
    cursor: Option<S::Cursor>,
}

impl<S: Sequence> SeqIter<S> {
    /// Iterate on given sequence. Nothing happens until the first call to `next`.
    pub fn new(sequence: S) -> Self {
        SeqIter {
            sequence,
            cursor: None,
        }
    }
    /// Give back the sequence.
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Element;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_none() {
            self.cursor = Some(self.sequence.first());
        }
        let cursor = self.cursor.as_mut()?;
        if self.sequence.is_last(cursor) {
            return None;
        }
        let element = self.sequence.read_at(cursor);
        self.sequence.inc(cursor);
        Some(element)
    }
}

impl<B: Sequence> IntoIterator for Take<B> {
    type Item = B::Element;
    type IntoIter = SeqIter<Self>;
    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}

impl IntoIterator for Ints {
    type Item = isize;
    type IntoIter = SeqIter<Self>;
    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}

impl<I> IntoIterator for FromIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    type IntoIter = SeqIter<Self>;
    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}
