//! Bet levels, bucket-aligned schedules, and the baseline ramps that
//! optimized schedules are measured against.

pub mod kelly;
pub use kelly::*;

pub mod levels;
pub use levels::*;

pub mod piecewise;
pub use piecewise::*;

pub mod schedule;
pub use schedule::*;

use crate::Buckets;

/// A rule mapping true count to a raw bet amount.
///
/// Raw amounts need not be admissible; [`Ramp::schedule`] snaps each one
/// to the nearest level.
pub trait Ramp {
    fn bet(&self, true_count: f64) -> f64;

    fn schedule(&self, buckets: &Buckets, levels: &Levels) -> Schedule {
        buckets
            .iter()
            .map(|b| self.bet(b.true_count()))
            .map(|x| levels.snap(x))
            .collect::<Vec<_>>()
            .into()
    }
}
