//! All `length` arithmetic goes through here: we never wrap silently.
use crate::error::{fatal, Error};
use crate::Distance;
use std::any::type_name;
use std::convert::TryInto;
use std::fmt::Display;

/// `lhs + rhs`, fatal on overflow.
#[inline]
#[track_caller]
pub fn checked_add(lhs: Distance, rhs: Distance) -> Distance {
    lhs.checked_add(rhs)
        .unwrap_or_else(|| fatal(Error::Overflow { lhs, op: '+', rhs }))
}

/// `lhs - rhs`, fatal on overflow.
#[inline]
#[track_caller]
pub fn checked_sub(lhs: Distance, rhs: Distance) -> Distance {
    lhs.checked_sub(rhs)
        .unwrap_or_else(|| fatal(Error::Overflow { lhs, op: '-', rhs }))
}

/// Primitive integers, the only accepted types for counts.
pub trait Integral: Copy + Display + TryInto<Distance> {}

macro_rules! integral {
    ($($type: ty),*) => {
        $(impl Integral for $type {})*
    };
}

integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Convert any primitive integer into a `Distance`, fatal if it does not fit.
///
/// # Example
///
/// ```
/// use sequence_adaptive::num::checked_cast;
/// assert_eq!(checked_cast(3u8), 3);
/// assert_eq!(checked_cast(-7i64), -7);
/// ```
#[track_caller]
pub fn checked_cast<T: Integral>(value: T) -> Distance {
    value.try_into().unwrap_or_else(|_| {
        fatal(Error::Cast {
            value: value.to_string(),
            ty: type_name::<T>(),
        })
    })
}
