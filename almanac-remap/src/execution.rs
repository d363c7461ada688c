use log::debug;
use num_traits::{PrimInt, Unsigned};

use almanac_core::models::{Interval, Pipeline};

use crate::mapper::map_through_pipeline;
use crate::splitter::SplitIter;
use crate::traits::Remapper;

/// Run a working set of intervals through every stage of a pipeline.
///
/// Each stage replaces the working set with the images of all its members.
/// With `coalesce`, overlapping and back-to-back intervals are merged after
/// each stage; the covered values (and so the minimum) stay the same.
///
/// # Arguments
///
/// - intervals: the starting working set, e.g. the seed ranges
/// - pipeline: stages to apply, in order
/// - coalesce: merge the working set after each stage
pub fn map_intervals_through_pipeline<I>(
    intervals: &[Interval<I>],
    pipeline: &Pipeline<I>,
    coalesce: bool,
) -> Vec<Interval<I>>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pipeline.iter().fold(intervals.to_vec(), |working, stage| {
        let mapped: Vec<Interval<I>> = working
            .iter()
            .flat_map(|interval| SplitIter::new(interval, stage))
            .collect();

        let mapped = if coalesce {
            coalesce_intervals(mapped)
        } else {
            mapped
        };

        debug!(
            "{}: {} -> {} intervals",
            stage.name(),
            working.len(),
            mapped.len()
        );
        mapped
    })
}

/// Sort and merge intervals that overlap or sit back to back.
pub fn coalesce_intervals<I>(mut intervals: Vec<Interval<I>>) -> Vec<Interval<I>>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    intervals.sort_unstable();

    let mut merged: Vec<Interval<I>> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if last.touches(&interval) => *last = last.hull(&interval),
            _ => merged.push(interval),
        }
    }
    merged
}

impl<I> Remapper<I> for Pipeline<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    fn map_value(&self, value: I) -> I {
        map_through_pipeline(value, self)
    }

    fn map_interval(&self, interval: &Interval<I>) -> Vec<Interval<I>> {
        map_intervals_through_pipeline(std::slice::from_ref(interval), self, false)
    }

    fn map_intervals(&self, intervals: &[Interval<I>]) -> Vec<Interval<I>> {
        map_intervals_through_pipeline(intervals, self, false)
    }
}
