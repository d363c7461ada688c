use std::fmt::{self, Display};

use indicatif::ProgressBar;
use log::info;
use num_traits::{PrimInt, Unsigned};
use rayon::prelude::*;

use almanac_core::errors::EmptyResultError;
use almanac_core::models::{Almanac, Interval};

use crate::config::RemapConfig;
use crate::errors::RemapResult;
use crate::execution::map_intervals_through_pipeline;
use crate::mapper::map_through_pipeline;
use crate::minimum::{minimum_start, minimum_value};

/// The answers a [`Solver`] produced. Parts not asked for are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution<I> {
    pub part_one: Option<I>,
    pub part_two: Option<I>,
}

impl<I: Display> Display for Solution<I> {
    /// One line per computed part, part one first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = [&self.part_one, &self.part_two]
            .into_iter()
            .flatten()
            .map(|v| v.to_string())
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Answers the two minimum-location questions for a parsed almanac.
///
/// # Examples
///
/// ```
/// use almanac_core::models::Almanac;
/// use almanac_remap::{RemapConfig, Solver};
///
/// let almanac: Almanac<u64> = "seeds: 5 10\n\nseed-to-soil map:\n100 0 8\n"
///     .parse()
///     .unwrap();
/// let solver = Solver::new(&almanac, RemapConfig::default());
///
/// // scalar seeds 5 -> 105 and 10 -> 10
/// assert_eq!(solver.part_one().unwrap(), 10);
/// // seed range [5, 15) -> [105, 108) and [8, 15)
/// assert_eq!(solver.part_two().unwrap(), 8);
/// ```
pub struct Solver<'a, I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    almanac: &'a Almanac<I>,
    config: RemapConfig,
}

impl<'a, I> Solver<'a, I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub fn new(almanac: &'a Almanac<I>, config: RemapConfig) -> Self {
        Solver { almanac, config }
    }

    pub fn config(&self) -> &RemapConfig {
        &self.config
    }

    /// Lowest location over the scalar seeds.
    pub fn part_one(&self) -> RemapResult<I> {
        let pipeline = &self.almanac.pipeline;
        let locations = self
            .almanac
            .seeds
            .scalars()
            .iter()
            .map(|&seed| map_through_pipeline(seed, pipeline));

        Ok(minimum_value(locations)?)
    }

    /// Lowest location over every seed range.
    ///
    /// Each range runs through the pipeline on its own and the per-range
    /// minima are reduced; with more than one thread the ranges are spread
    /// over a dedicated pool. Any failing range fails the whole answer.
    pub fn part_two(&self) -> RemapResult<I> {
        let ranges = self.almanac.seeds.ranges()?;
        if ranges.is_empty() {
            return Err(EmptyResultError.into());
        }

        let pipeline = &self.almanac.pipeline;
        let coalesce = self.config.coalesce;
        let bar = if self.config.progress {
            ProgressBar::new(ranges.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let lowest_in_range = |range: &Interval<I>| -> Result<I, EmptyResultError> {
            let locations =
                map_intervals_through_pipeline(std::slice::from_ref(range), pipeline, coalesce);
            bar.inc(1);
            minimum_start(&locations)
        };

        let lowest = match self.config.threads {
            Some(num_threads) if self.config.is_parallel() => {
                info!(
                    "Mapping {} seed ranges on {} threads",
                    ranges.len(),
                    num_threads
                );
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()?;
                pool.install(|| {
                    ranges
                        .par_iter()
                        .map(lowest_in_range)
                        .try_reduce(I::max_value, |a, b| Ok(std::cmp::min(a, b)))
                })?
            }
            _ => {
                info!("Mapping {} seed ranges", ranges.len());
                ranges
                    .iter()
                    .map(lowest_in_range)
                    .try_fold(I::max_value(), |acc, lowest| {
                        lowest.map(|v| std::cmp::min(acc, v))
                    })?
            }
        };

        bar.finish_and_clear();
        Ok(lowest)
    }

    /// Compute the parts selected in the config.
    pub fn solve(&self) -> RemapResult<Solution<I>> {
        let part = self.config.part;
        Ok(Solution {
            part_one: part.includes_one().then(|| self.part_one()).transpose()?,
            part_two: part.includes_two().then(|| self.part_two()).transpose()?,
        })
    }
}
