use super::*;
use crate::Buckets;
use crate::Dollars;
use crate::Error;
use crate::Evaluation;
use crate::Result;
use crate::Schedule;
use crate::Solver;
use std::time::Duration;
use std::time::Instant;

/// Dinkelbach's method over any inner [`Solver`].
///
/// Starting from λ = N₀/D₀ of a baseline schedule, each iteration solves
/// `max N(b) − λ·D(b)` under a fixed risk budget, scores the result, and
/// sets λ to its ratio. The loop stops when |N − λD| drops below the
/// tolerance, the iteration cap is hit, or the deadline passes.
///
/// Discretization and tie-breaking mean the ratio sequence need not be
/// monotone, so the best schedule seen is returned rather than the last.
pub struct Dinkelbach<'a, S: Solver> {
    buckets: &'a Buckets,
    solver: S,
    tolerance: f64,
    iterations: usize,
    deadline: Option<Duration>,
}

impl<'a, S: Solver> Dinkelbach<'a, S> {
    pub fn new(buckets: &'a Buckets, solver: S) -> Self {
        Self {
            buckets,
            solver,
            tolerance: crate::TOLERANCE,
            iterations: crate::ITERATIONS,
            deadline: None,
        }
    }

    pub fn tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }
    pub fn iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
    /// Wall clock budget, checked between iterations.
    pub fn deadline(self, deadline: Option<Duration>) -> Self {
        Self { deadline, ..self }
    }

    /// Optimize at the baseline's own risk.
    pub fn optimize(&self, baseline: &Schedule) -> Result<Solution> {
        let budget = Evaluation::of(self.buckets, baseline)?.risk;
        self.optimize_within(baseline, budget)
    }

    /// Optimize under an explicit risk budget.
    ///
    /// A baseline riskier than `budget` still sets the starting λ but is
    /// never returned; if no iterate runs in that case the result is
    /// [`Error::Unsolved`].
    pub fn optimize_within(&self, baseline: &Schedule, budget: Dollars) -> Result<Solution> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(Error::RiskBudget(budget));
        }
        let origin = Evaluation::of(self.buckets, baseline)?;
        let mut weight = origin.ratio()?;
        // the baseline only competes when it fits the budget itself
        let mut best = match origin.risk <= budget {
            true => Some((baseline.clone(), weight)),
            false => None,
        };
        let mut history = Vec::with_capacity(self.iterations);
        let mut converged = false;
        let start = Instant::now();
        log::info!("risk budget {:.6}, baseline ratio {:.9}", budget, weight);
        for t in 0..self.iterations {
            if self.deadline.is_some_and(|d| start.elapsed() >= d) {
                log::warn!("deadline reached after {} iterations", t);
                break;
            }
            let schedule = self.solver.solve(weight, budget)?;
            let eval = Evaluation::of(self.buckets, &schedule)?;
            let ratio = eval.ratio()?;
            let gap = eval.gap(weight);
            log::info!(
                "{:<16}{:<24}{:<24}{:<20}",
                format!("iteration {}", t + 1),
                format!("λ {:.12}", weight),
                format!("ratio {:.12}", ratio),
                format!("gap {:.3e}", gap),
            );
            history.push(Iterate {
                weight,
                ratio,
                gap,
                risk: eval.risk,
            });
            if best.as_ref().is_none_or(|(_, b)| ratio > *b) {
                best = Some((schedule, ratio));
            }
            weight = ratio;
            if gap.abs() < self.tolerance {
                converged = true;
                break;
            }
        }
        if !converged {
            log::warn!("stopped without converging; returning best ratio seen");
        }
        let (schedule, ratio) = best.ok_or(Error::Unsolved(budget))?;
        Ok(Solution {
            schedule,
            ratio,
            weight,
            budget,
            converged,
            history,
        })
    }
}
