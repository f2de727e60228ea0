// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Points in time and the small helpers [`period::Period`](crate::period::Period)
//! builds its bound arithmetic on.

use num_traits::PrimInt;
use std::fmt::Display;

/// A specific point in time, at whatever resolution the underlying integer
/// represents (seconds, hours, days).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp<T: PrimInt>(T);

impl<T: PrimInt> Timestamp<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Timestamp(value)
    }

    /// The zero timestamp, the domain's "beginning of time".
    #[inline]
    pub fn zero() -> Self {
        Timestamp(T::zero())
    }

    /// Reports whether this is the zero timestamp.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == T::zero()
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }
}

impl<T: PrimInt> Default for Timestamp<T> {
    #[inline]
    fn default() -> Self {
        Timestamp::zero()
    }
}

impl<T: PrimInt + Display> Display for Timestamp<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({})", self.value())
    }
}

impl<T: PrimInt> From<T> for Timestamp<T> {
    #[inline]
    fn from(v: T) -> Self {
        Timestamp(v)
    }
}

/// Returns the earliest of the given timestamps, or the zero timestamp when
/// given none.
#[inline]
pub fn earliest<T, I>(values: I) -> Timestamp<T>
where
    T: PrimInt,
    I: IntoIterator<Item = Timestamp<T>>,
{
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return Timestamp::zero();
    };
    iter.fold(first, |m, v| if v < m { v } else { m })
}

/// Returns the latest of the given timestamps, or the zero timestamp when
/// given none.
#[inline]
pub fn latest<T, I>(values: I) -> Timestamp<T>
where
    T: PrimInt,
    I: IntoIterator<Item = Timestamp<T>>,
{
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return Timestamp::zero();
    };
    iter.fold(first, |m, v| if v > m { v } else { m })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_creation() {
        let ts = Timestamp::new(42);
        assert_eq!(ts.value(), 42);
    }

    #[test]
    fn test_timestamp_zero_and_default() {
        let z: Timestamp<i64> = Timestamp::zero();
        assert!(z.is_zero());
        assert_eq!(z, Timestamp::default());
        assert!(!Timestamp::new(1).is_zero());
    }

    #[test]
    fn test_timestamp_ordering() {
        assert!(Timestamp::new(1) < Timestamp::new(2));
        assert!(Timestamp::new(-3) < Timestamp::new(0));
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(format!("{}", Timestamp::new(42)), "Timestamp(42)");
    }

    #[test]
    fn test_timestamp_from() {
        let ts: Timestamp<i32> = 42.into();
        assert_eq!(ts.value(), 42);
    }

    #[test]
    fn test_earliest_of_none_is_zero() {
        let got: Timestamp<i64> = earliest([]);
        assert!(got.is_zero());
    }

    #[test]
    fn test_earliest_picks_minimum() {
        let got = earliest([Timestamp::new(12), Timestamp::new(15), Timestamp::new(14)]);
        assert_eq!(got, Timestamp::new(12));
    }

    #[test]
    fn test_latest_of_none_is_zero() {
        let got: Timestamp<i64> = latest([]);
        assert!(got.is_zero());
    }

    #[test]
    fn test_latest_picks_maximum() {
        let got = latest([Timestamp::new(12), Timestamp::new(15), Timestamp::new(14)]);
        assert_eq!(got, Timestamp::new(15));
    }
}
