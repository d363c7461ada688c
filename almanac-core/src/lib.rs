//! Core data model for staged interval remapping.
//!
//! An almanac document lists seed values followed by named stages of range
//! rules. Each stage translates values through offset-preserving rules and
//! leaves everything else untouched; the stages run in file order.
//!
//! ```rust
//! use almanac_core::models::Almanac;
//!
//! let almanac: Almanac<u64> = "seeds: 79 14\n\nseed-to-soil map:\n52 50 48\n"
//!     .parse()
//!     .unwrap();
//!
//! let stage = &almanac.pipeline.stages()[0];
//! assert_eq!(stage.find_rule(79).map(|r| r.translate(79)), Some(81));
//! assert_eq!(stage.find_rule(14), None);
//! ```
//!
//! The algorithms that run values and intervals through a pipeline live in
//! `almanac-remap`.

pub mod errors;
pub mod models;
pub mod parser;
pub mod utils;

pub use self::errors::{AlmanacError, AlmanacResult};
pub use self::parser::parse_almanac;
