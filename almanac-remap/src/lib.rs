//! Staged range remapping over almanac pipelines.
//!
//! An almanac is a chain of stages, each a set of `(destination, source, length)`
//! rules that shift a source range onto a destination range. Values no rule
//! covers pass through unchanged. This crate maps single values through that
//! chain and, more importantly, whole intervals of values at once: an interval
//! is cut at rule boundaries and every piece is shifted in one step, so a seed
//! range of a trillion values costs about as much as a handful of seeds.
//!
//! ## Quick Start
//!
//! ```rust
//! use almanac_core::models::{Almanac, Interval};
//! use almanac_remap::{Remapper, map_through_pipeline};
//!
//! let almanac: Almanac<u64> = "seeds: 79 14
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! "
//! .parse()
//! .unwrap();
//!
//! assert_eq!(map_through_pipeline(79, &almanac.pipeline), 81);
//!
//! // [90, 100) is split at 98 and both halves are shifted
//! let pieces = almanac.pipeline.map_interval(&Interval::new(90u64, 10).unwrap());
//! assert_eq!(pieces.len(), 2);
//! assert_eq!(pieces.iter().map(|i| i.start()).min(), Some(50));
//! ```
//!
//! ## Solving
//!
//! [`Solver`] answers the two questions asked of an almanac: the lowest
//! location reached by the scalar seeds, and the lowest location reached by
//! any value of the seed ranges. See [`RemapConfig`] for threading and
//! coalescing options.

/// Run configuration and its TOML form.
pub mod config;

/// Error types for solving.
pub mod errors;

/// Interval working sets pushed through whole pipelines.
pub mod execution;

/// Point mapping and stage-by-stage traces.
pub mod mapper;

/// Minimum queries over mapped values and intervals.
pub mod minimum;

/// Part one and part two answers.
pub mod solver;

/// Cutting an interval at the rule boundaries of one stage.
///
/// See [`SplitIter`] for details.
pub mod splitter;

/// The [`Remapper`] trait.
pub mod traits;

#[cfg(test)]
mod fixtures;

// re-exports
pub use self::config::{Part, RemapConfig, RemapConfigError};
pub use self::errors::{RemapError, RemapResult};
pub use self::execution::{coalesce_intervals, map_intervals_through_pipeline};
pub use self::mapper::{TraceStep, map_through_pipeline, map_value, trace};
pub use self::minimum::{minimum_start, minimum_value};
pub use self::solver::{Solution, Solver};
pub use self::splitter::{SplitIter, split};
pub use self::traits::{Interval, Remapper};

/// Constants used throughout the crate.
pub mod consts {
    /// The command name for solving an almanac.
    pub const SOLVE_CMD: &str = "solve";
    /// The command name for tracing values stage by stage.
    pub const TRACE_CMD: &str = "trace";
}
