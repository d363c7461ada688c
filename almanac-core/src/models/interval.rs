use std::fmt::{self, Display};

use num_traits::{PrimInt, Unsigned, identities::one};

use crate::errors::IntervalError;

/// Represent a range [start, start + length)
/// Inclusive start, exclusive of end. Never empty.
///
/// Ordering is by start, then by length.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct Interval<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    start: I,
    length: I,
}

impl<I> Interval<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    /// Build `[start, start + length)`.
    ///
    /// ```
    /// use almanac_core::models::Interval;
    ///
    /// let iv = Interval::new(79u64, 14).unwrap();
    /// assert_eq!(iv.end(), 93);
    /// assert!(Interval::new(79u64, 0).is_err());
    /// ```
    pub fn new(start: I, length: I) -> Result<Self, IntervalError> {
        if length.is_zero() {
            return Err(IntervalError::ZeroLength);
        }
        start
            .checked_add(&length)
            .ok_or(IntervalError::EndOverflow)?;
        Ok(Interval { start, length })
    }

    /// Build `[start, end)`.
    pub fn from_bounds(start: I, end: I) -> Result<Self, IntervalError> {
        if end <= start {
            return Err(IntervalError::ZeroLength);
        }
        Ok(Interval {
            start,
            length: end - start,
        })
    }

    /// A single-value interval `[value, value + 1)`.
    pub fn unit(value: I) -> Result<Self, IntervalError> {
        Self::new(value, one())
    }

    #[inline]
    pub fn start(&self) -> I {
        self.start
    }

    #[inline]
    pub fn length(&self) -> I {
        self.length
    }

    /// Exclusive end. Never overflows, checked at construction.
    #[inline]
    pub fn end(&self) -> I {
        self.start + self.length
    }

    #[inline]
    pub fn contains(&self, value: I) -> bool {
        self.start <= value && value < self.end()
    }

    /// Check if two intervals share at least one value
    #[inline]
    pub fn overlaps(&self, other: &Interval<I>) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Check if two intervals overlap or sit back to back
    #[inline]
    pub fn touches(&self, other: &Interval<I>) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }

    /// Compute the intersection of two intervals, if any
    pub fn intersect(&self, other: &Interval<I>) -> Option<Interval<I>> {
        let start = std::cmp::max(self.start, other.start);
        let end = std::cmp::min(self.end(), other.end());
        Interval::from_bounds(start, end).ok()
    }

    /// The part of this interval at or after `at`, if any.
    pub fn clip_start(&self, at: I) -> Option<Interval<I>> {
        Interval::from_bounds(std::cmp::max(self.start, at), self.end()).ok()
    }

    /// The part of this interval before `at`, if any.
    pub fn clip_end(&self, at: I) -> Option<Interval<I>> {
        Interval::from_bounds(self.start, std::cmp::min(self.end(), at)).ok()
    }

    /// Smallest interval covering both. Only meaningful when they touch.
    pub fn hull(&self, other: &Interval<I>) -> Interval<I> {
        let start = std::cmp::min(self.start, other.start);
        let end = std::cmp::max(self.end(), other.end());
        Interval {
            start,
            length: end - start,
        }
    }
}

impl<I> Display for Interval<I>
where
    I: PrimInt + Unsigned + Send + Sync + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
