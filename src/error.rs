//! There is no recovery path in this crate: a misuse (negative count, overflowing
//! cursor arithmetic, reading outside of a sequence) terminates the operation.
//! `fatal` is the only place where this happens.
use crate::Distance;
use thiserror::Error;

/// Everything that can go wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `take` was given a negative count.
    #[error("negative count {0} passed to take()")]
    NegativeCount(Distance),
    /// Cursor arithmetic went out of the `Distance` range.
    #[error("distance overflow computing {lhs} {op} {rhs}")]
    Overflow {
        /// left operand
        lhs: Distance,
        /// `+` or `-`
        op: char,
        /// right operand
        rhs: Distance,
    },
    /// An integral value could not be converted into a `Distance`.
    #[error("{value} ({ty}) does not fit in a distance")]
    Cast {
        /// the value, printed
        value: String,
        /// its type
        ty: &'static str,
    },
    /// An element was read at a position outside of the sequence.
    #[error("read at position {position} of a sequence of {len} elements")]
    OutOfBounds {
        /// where we tried to read
        position: Distance,
        /// how many elements there are
        len: Distance,
    },
    /// A single-pass sequence was read past its end, or read again after a move.
    #[error("read from an exhausted single-pass sequence")]
    Exhausted,
}

/// Report the error and abort the current operation. This never returns.
#[cold]
#[track_caller]
pub fn fatal(error: Error) -> ! {
    log_error!(error = %error, "fatal sequence error");
    panic!("{}", error)
}
