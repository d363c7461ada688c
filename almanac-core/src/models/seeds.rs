use num_traits::{PrimInt, Unsigned};

use crate::errors::{ConfigError, IntervalError};
use crate::models::Interval;

///
/// The integers of the `seeds:` line. Read one at a time they are scalar
/// seeds; read two at a time they are `(start, length)` seed ranges.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct SeedSpec<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    values: Vec<I>,
}

impl<I> SeedSpec<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub fn new(values: Vec<I>) -> Self {
        SeedSpec { values }
    }

    pub fn scalars(&self) -> &[I] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pair the values up as seed ranges.
    ///
    /// ```
    /// use almanac_core::models::SeedSpec;
    ///
    /// let seeds = SeedSpec::new(vec![79u64, 14, 55, 13]);
    /// let ranges = seeds.ranges().unwrap();
    /// assert_eq!(ranges.len(), 2);
    /// assert_eq!(ranges[1].end(), 68);
    /// ```
    pub fn ranges(&self) -> Result<Vec<Interval<I>>, ConfigError> {
        if self.values.len() % 2 != 0 {
            return Err(ConfigError::UnpairedSeed {
                count: self.values.len(),
            });
        }

        self.values
            .chunks_exact(2)
            .enumerate()
            .map(|(index, pair)| {
                Interval::new(pair[0], pair[1]).map_err(|e| match e {
                    IntervalError::ZeroLength => ConfigError::EmptySeedRange { index },
                    IntervalError::EndOverflow => ConfigError::SeedRangeOverflow { index },
                })
            })
            .collect()
    }
}
