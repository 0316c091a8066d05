//! Inner solvers for the Dinkelbach surrogate.
//!
//! - [`Solver`]: the seam the outer loop is generic over
//! - [`Tableau`]: per (bucket, level) reward and discretized risk cost
//! - [`Trail`]: predecessor links for backtracking
//! - [`RiskDP`]: exact dynamic program over (level, risk bin) states

pub mod dp;
pub use dp::*;

pub mod tableau;
pub use tableau::*;

pub mod trail;
pub use trail::*;

use crate::Dollars;
use crate::Edge;
use crate::Result;
use crate::Schedule;

/// Maximizes the linear surrogate N(b) − λ·D(b) over admissible schedules
/// whose risk does not exceed `budget`.
///
/// Implementations must be deterministic: identical arguments yield an
/// identical schedule.
pub trait Solver {
    fn solve(&self, weight: Edge, budget: Dollars) -> Result<Schedule>;
}
