pub mod almanac;
pub mod interval;
pub mod pipeline;
pub mod rule;
pub mod seeds;
pub mod stage;

// re-export for cleaner imports
pub use self::almanac::Almanac;
pub use self::interval::Interval;
pub use self::pipeline::{ChainBreak, Pipeline};
pub use self::rule::RangeRule;
pub use self::seeds::SeedSpec;
pub use self::stage::MapStage;
