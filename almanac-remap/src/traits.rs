use num_traits::{PrimInt, Unsigned};

pub use almanac_core::models::Interval;

/// Something that translates values, and whole intervals of values, onto new values.
///
/// Implemented by a single [`MapStage`](almanac_core::models::MapStage) and by a
/// whole [`Pipeline`](almanac_core::models::Pipeline).
pub trait Remapper<I>: Send + Sync
where
    I: PrimInt + Unsigned + Send + Sync,
{
    /// Translate one value.
    fn map_value(&self, value: I) -> I;

    /// Translate every value of `interval` at once. The output intervals are
    /// the exact image of the input, in no particular order.
    fn map_interval(&self, interval: &Interval<I>) -> Vec<Interval<I>>;

    /// Translate a set of intervals. Outputs are concatenated; nothing is merged.
    fn map_intervals(&self, intervals: &[Interval<I>]) -> Vec<Interval<I>> {
        intervals
            .iter()
            .flat_map(|interval| self.map_interval(interval))
            .collect()
    }
}
