//! Marker types for implementing OR in where clauses.
//!
//! Some operations are available under alternative conditions. For example the size of a
//! `take` is known if its base is sized OR infinite. This is **NOT** possible:
//! ```compile_fail
//! trait Sized_ {}
//! trait Infinite {}
//! trait TruncatedSize {}
//! impl<S: Sized_> TruncatedSize for S {}
//! impl<S: Infinite> TruncatedSize for S {}
//! ```
//! because we might have two conflicting implementations in case `S` is both.
//!
//! Instead each sequence declares its `Extent` as an associated marker type and we
//! implement dispatching traits on the markers themselves. Since `KnownSize` and
//! `Infinite` are different types the implementations never conflict and the choice
//! is made at compile time.
//!
//! In the same way each sequence declares its `Pass` and adaptors branch on
//! `Pass::MULTIPASS`, a constant the compiler folds away.
use crate::prelude::*;
use crate::Distance;
use std::cmp::min;

/// Cursors can be reused: traversing again from a saved cursor yields the same elements.
#[derive(Debug, Clone, Copy)]
pub struct Multipass;
/// Traversal consumes the sequence.
#[derive(Debug, Clone, Copy)]
pub struct SinglePass;

/// To constrain types a little bit all pass markers need to implement this.
pub trait Pass {
    /// Can we step past the end of a view without harm ?
    const MULTIPASS: bool;
}

impl Pass for Multipass {
    const MULTIPASS: bool = true;
}

impl Pass for SinglePass {
    const MULTIPASS: bool = false;
}

/// Number of elements is not known without traversing.
#[derive(Debug, Clone, Copy)]
pub struct UnknownSize;
/// Number of elements is given by `SizedSequence::size`.
#[derive(Debug, Clone, Copy)]
pub struct KnownSize;
/// There is no end.
#[derive(Debug, Clone, Copy)]
pub struct Infinite;

/// To constrain types a little bit all extent markers need to implement this.
pub trait Extent {
    /// Extent of a truncated sequence.
    type Truncated: Extent;
}

impl Extent for UnknownSize {
    type Truncated = UnknownSize;
}

impl Extent for KnownSize {
    type Truncated = KnownSize;
}

impl Extent for Infinite {
    type Truncated = KnownSize;
}

/// Extents we can clamp a count against.
pub trait Clamp<S: Sequence + ?Sized>: Extent<Truncated = KnownSize> {
    /// Number of elements left in `sequence` after truncating it to `count` elements.
    fn clamp(sequence: &S, count: Distance) -> Distance;
}

impl<S: SizedSequence + ?Sized> Clamp<S> for KnownSize {
    fn clamp(sequence: &S, count: Distance) -> Distance {
        min(sequence.size(), count)
    }
}

impl<S: InfiniteSequence + ?Sized> Clamp<S> for Infinite {
    fn clamp(_sequence: &S, count: Distance) -> Distance {
        count
    }
}

/// Extents for which the end of a truncation can be reached from the start.
/// Sized sequences need random access for that.
pub trait Reach<S: Sequence + ?Sized>: Clamp<S> {
    /// Move `cursor` forward by `offset` elements.
    fn reach(sequence: &mut S, cursor: &mut S::Cursor, offset: Distance);
}

impl<S: SizedSequence + RandomAccessSequence + ?Sized> Reach<S> for KnownSize {
    fn reach(sequence: &mut S, cursor: &mut S::Cursor, offset: Distance) {
        sequence.inc_by(cursor, offset)
    }
}

impl<S: InfiniteSequence + ?Sized> Reach<S> for Infinite {
    fn reach(sequence: &mut S, cursor: &mut S::Cursor, offset: Distance) {
        sequence.advance(cursor, offset)
    }
}
