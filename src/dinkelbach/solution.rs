use crate::Dollars;
use crate::Edge;
use crate::Schedule;
use serde::Serialize;

/// One pass of the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Iterate {
    /// λ the surrogate was solved at.
    pub weight: Edge,
    /// N / D of the schedule it returned.
    pub ratio: Edge,
    /// N − λD of that schedule. Zero at the optimum.
    pub gap: Dollars,
    pub risk: Dollars,
}

/// Best schedule found and how the loop got there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub schedule: Schedule,
    pub ratio: Edge,
    /// λ after the last iteration.
    pub weight: Edge,
    /// Risk budget every iteration was solved under.
    pub budget: Dollars,
    pub converged: bool,
    pub history: Vec<Iterate>,
}

impl Solution {
    pub fn rtp(&self) -> f64 {
        1.0 + self.ratio
    }
    pub fn iterations(&self) -> usize {
        self.history.len()
    }
}
