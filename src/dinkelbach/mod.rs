//! Fractional programming outer loop.
//!
//! Maximizes N(b) / D(b) by repeatedly maximizing N(b) − λ·D(b) with an
//! inner [`crate::Solver`] and resetting λ to the achieved ratio.

pub mod driver;
pub use driver::*;

pub mod solution;
pub use solution::*;
