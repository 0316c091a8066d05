//! Per-true-count statistics consumed by the optimizer.
//!
//! - [`Record`]: raw simulator output for one true count
//! - [`Filter`]: sample-size and true-count range cut
//! - [`Bucket`]: derived probability, edge, and wager multiplier
//! - [`Buckets`]: sorted, normalized collection indexing everything else

pub mod bucket;
pub use bucket::*;

pub mod buckets;
pub use buckets::*;

pub mod filter;
pub use filter::*;

pub mod record;
pub use record::*;
