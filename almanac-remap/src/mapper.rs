use num_traits::{PrimInt, Unsigned};

use almanac_core::models::{MapStage, Pipeline};

/// The value a [`trace`] observed after one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep<'a, I> {
    pub stage: &'a str,
    pub value: I,
}

/// Translate one value through one stage.
///
/// ```
/// use almanac_core::models::{MapStage, RangeRule};
/// use almanac_remap::mapper::map_value;
///
/// let stage = MapStage::new("seed-to-soil", vec![RangeRule::new(52u64, 50, 48).unwrap()]).unwrap();
/// assert_eq!(map_value(79, &stage), 81);
/// assert_eq!(map_value(14, &stage), 14);
/// ```
#[inline]
pub fn map_value<I>(value: I, stage: &MapStage<I>) -> I
where
    I: PrimInt + Unsigned + Send + Sync,
{
    stage
        .find_rule(value)
        .map_or(value, |rule| rule.translate(value))
}

/// Fold [`map_value`] over every stage, in order.
pub fn map_through_pipeline<I>(value: I, pipeline: &Pipeline<I>) -> I
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pipeline
        .iter()
        .fold(value, |acc, stage| map_value(acc, stage))
}

/// Like [`map_through_pipeline`], but keeps the value after each stage.
pub fn trace<I>(value: I, pipeline: &Pipeline<I>) -> Vec<TraceStep<'_, I>>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pipeline
        .iter()
        .scan(value, |acc, stage| {
            *acc = map_value(*acc, stage);
            Some(TraceStep {
                stage: stage.name(),
                value: *acc,
            })
        })
        .collect()
}
