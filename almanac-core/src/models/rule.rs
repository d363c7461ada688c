use num_traits::{PrimInt, Unsigned};

use crate::errors::IntervalError;
use crate::models::Interval;

///
/// One translation rule: `[source_start, source_start + length)` maps onto
/// `[destination_start, destination_start + length)`, preserving offsets.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct RangeRule<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    destination: Interval<I>,
    source: Interval<I>,
}

impl<I> RangeRule<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    /// Arguments come in input order: destination start, source start, length.
    ///
    /// ```
    /// use almanac_core::models::RangeRule;
    ///
    /// let rule = RangeRule::new(52u64, 50, 48).unwrap();
    /// assert_eq!(rule.apply(79), Some(81));
    /// assert_eq!(rule.apply(98), None);
    /// ```
    pub fn new(destination_start: I, source_start: I, length: I) -> Result<Self, IntervalError> {
        Ok(RangeRule {
            destination: Interval::new(destination_start, length)?,
            source: Interval::new(source_start, length)?,
        })
    }

    #[inline]
    pub fn destination_start(&self) -> I {
        self.destination.start()
    }

    #[inline]
    pub fn source_start(&self) -> I {
        self.source.start()
    }

    /// Exclusive end of the source range.
    #[inline]
    pub fn source_end(&self) -> I {
        self.source.end()
    }

    #[inline]
    pub fn length(&self) -> I {
        self.source.length()
    }

    pub fn source(&self) -> &Interval<I> {
        &self.source
    }

    pub fn destination(&self) -> &Interval<I> {
        &self.destination
    }

    #[inline]
    pub fn contains(&self, value: I) -> bool {
        self.source.contains(value)
    }

    /// Translate a value this rule covers, `None` otherwise.
    pub fn apply(&self, value: I) -> Option<I> {
        self.contains(value).then(|| self.translate(value))
    }

    /// Image of the part of `interval` this rule covers, if any.
    ///
    /// ```
    /// use almanac_core::models::{Interval, RangeRule};
    ///
    /// let rule = RangeRule::new(52u64, 50, 48).unwrap();
    /// let image = rule.map_overlap(&Interval::new(40u64, 20).unwrap()).unwrap();
    /// assert_eq!((image.start(), image.end()), (52, 62));
    /// ```
    pub fn map_overlap(&self, interval: &Interval<I>) -> Option<Interval<I>> {
        let overlap = self.source.intersect(interval)?;
        Interval::new(self.translate(overlap.start()), overlap.length()).ok()
    }

    /// Translate a value assumed to lie in the source range.
    ///
    /// Can't overflow: the destination range was checked at construction.
    #[inline]
    pub fn translate(&self, value: I) -> I {
        debug_assert!(self.contains(value));
        self.destination.start() + (value - self.source.start())
    }
}
