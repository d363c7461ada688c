//! Staged range remapping.
//!
//! This crate bundles the almanac workspace behind feature flags:
//!
//! - `core`: the data model, parser and input readers ([`core`])
//! - `remap`: value and interval mapping, minimum queries and the solver ([`remap`])

#[cfg(feature = "core")]
#[doc(inline)]
pub use almanac_core as core;

#[cfg(feature = "remap")]
#[doc(inline)]
pub use almanac_remap as remap;
