use num_traits::{PrimInt, Unsigned};

use almanac_core::models::{Interval, MapStage, RangeRule};

use crate::mapper::map_value;
use crate::traits::Remapper;

/// Splits one interval into the pieces a stage maps differently, yielding the
/// image of each piece.
///
/// Walks the stage's sorted rules from the first one that can touch the
/// input, so the number of items is bounded by the number of rules
/// overlapping the input plus the identity gaps between them, never by the
/// input's length.
///
/// # Examples
///
/// ```
/// use almanac_core::models::{Interval, MapStage, RangeRule};
/// use almanac_remap::splitter::SplitIter;
///
/// let stage = MapStage::new(
///     "seed-to-soil",
///     vec![
///         RangeRule::new(50u64, 98, 2).unwrap(),
///         RangeRule::new(52u64, 50, 48).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// // [40, 110) = identity [40, 50) + [50, 98) shifted by 2 + [98, 100) shifted down + identity [100, 110)
/// let pieces: Vec<(u64, u64)> = SplitIter::new(&Interval::new(40u64, 70).unwrap(), &stage)
///     .map(|iv| (iv.start(), iv.end()))
///     .collect();
/// assert_eq!(pieces, vec![(40, 50), (52, 100), (50, 52), (100, 110)]);
/// ```
#[derive(Debug, Clone)]
pub struct SplitIter<'a, I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    rules: &'a [RangeRule<I>],
    /// first rule that may still touch `remaining`
    next_rule: usize,
    /// the not-yet-mapped tail of the input
    remaining: Option<Interval<I>>,
}

impl<'a, I> SplitIter<'a, I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub fn new(input: &Interval<I>, stage: &'a MapStage<I>) -> Self {
        SplitIter {
            rules: stage.rules(),
            next_rule: stage.lower_bound(input.start()),
            remaining: Some(*input),
        }
    }
}

impl<I> Iterator for SplitIter<'_, I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = Interval<I>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining?;
        let pos = remaining.start();

        while self
            .rules
            .get(self.next_rule)
            .is_some_and(|rule| rule.source_end() <= pos)
        {
            self.next_rule += 1;
        }

        let (piece, consumed_to) = match self.rules.get(self.next_rule) {
            // a rule covers pos: map as much as the rule covers
            Some(rule) if rule.source_start() <= pos => {
                let image = rule.map_overlap(&remaining)?;
                (image, std::cmp::min(remaining.end(), rule.source_end()))
            }
            // identity up to the next rule
            Some(rule) => {
                let gap = remaining.clip_end(rule.source_start())?;
                (gap, gap.end())
            }
            // past every rule
            None => (remaining, remaining.end()),
        };

        self.remaining = remaining.clip_start(consumed_to);
        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (0, Some(0)),
            // every rule left can add itself and the gap before it
            Some(_) => (1, Some(2 * (self.rules.len() - self.next_rule) + 1)),
        }
    }
}

impl<I> std::iter::FusedIterator for SplitIter<'_, I> where I: PrimInt + Unsigned + Send + Sync {}

/// Map `input` through `stage`, returning the exact image as disjoint intervals.
pub fn split<I>(input: &Interval<I>, stage: &MapStage<I>) -> Vec<Interval<I>>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    SplitIter::new(input, stage).collect()
}

impl<I> Remapper<I> for MapStage<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    fn map_value(&self, value: I) -> I {
        map_value(value, self)
    }

    fn map_interval(&self, interval: &Interval<I>) -> Vec<Interval<I>> {
        split(interval, self)
    }
}
