use num_traits::{PrimInt, Unsigned};

use almanac_core::errors::EmptyResultError;
use almanac_core::models::Interval;

/// Smallest start over a set of intervals.
///
/// ```
/// use almanac_core::models::Interval;
/// use almanac_remap::minimum::minimum_start;
///
/// let ivs = vec![Interval::new(60u64, 9).unwrap(), Interval::new(46u64, 10).unwrap()];
/// assert_eq!(minimum_start(&ivs), Ok(46));
/// assert!(minimum_start::<u64>(&[]).is_err());
/// ```
pub fn minimum_start<I>(intervals: &[Interval<I>]) -> Result<I, EmptyResultError>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    minimum_value(intervals.iter().map(Interval::start))
}

/// Smallest of a stream of values.
pub fn minimum_value<I, It>(values: It) -> Result<I, EmptyResultError>
where
    I: PrimInt + Unsigned + Send + Sync,
    It: IntoIterator<Item = I>,
{
    values.into_iter().min().ok_or(EmptyResultError)
}
