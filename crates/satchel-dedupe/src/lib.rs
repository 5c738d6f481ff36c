//! # satchel-dedupe
//!
//! Collapses duplicate entities arriving from multiple sources into one
//! canonical list, preserving first-seen priority order: sources are
//! consumed in the order given, and within a source, original order is
//! kept. Pure functions over explicit ordered slices — no incremental
//! state, trivially testable and thread-safe.

pub mod dedupe;
pub mod merge;
pub mod partition;
pub mod policy;

pub use dedupe::{dedupe_by_field, dedupe_by_id};
pub use merge::dedupe_with_merge;
pub use partition::{filter_by_ids, partition_by_field};
pub use policy::KeepPolicy;
