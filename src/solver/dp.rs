use super::*;
use crate::Buckets;
use crate::Error;
use crate::Levels;

/// Exact solver for
///
/// ```text
/// max Σ p·m·(e − λ)·b   s.t.  Σ p·m²·b² ≤ R,  b ∈ levels,  (b non-decreasing)
/// ```
///
/// over a risk budget discretized into `bins` bins.
///
/// States are (level of the last bucket, bins consumed so far). Buckets are
/// processed in true count order, rolling two layers of best rewards and
/// recording every predecessor in a [`Trail`] for backtracking.
///
/// Costs O(n·L²·K) time and O(n·L·K) link memory for n buckets,
/// L levels and K bins.
#[derive(Debug, Clone, Copy)]
pub struct RiskDP<'a> {
    buckets: &'a Buckets,
    levels: &'a Levels,
    bins: usize,
    monotone: bool,
}

impl<'a> RiskDP<'a> {
    pub fn new(
        buckets: &'a Buckets,
        levels: &'a Levels,
        bins: usize,
        monotone: bool,
    ) -> Result<Self> {
        if buckets.is_empty() {
            return Err(Error::Empty);
        }
        if bins == 0 {
            return Err(Error::Resolution);
        }
        Ok(Self {
            buckets,
            levels,
            bins,
            monotone,
        })
    }

    /// States per level: risk bins 0..=K.
    fn height(&self) -> usize {
        self.bins + 1
    }
    /// States per bucket.
    fn width(&self) -> usize {
        self.levels.len() * self.height()
    }

    /// First bucket: every affordable level is reachable from nothing.
    fn seed(&self, tableau: &Tableau, layer: &mut [f64], links: &mut [u32]) {
        for j in 0..self.levels.len() {
            if let Some(cost) = tableau.cost(0, j) {
                let s = j * self.height() + cost;
                layer[s] = tableau.value(0, j);
                links[s] = Trail::ROOT;
            }
        }
    }

    /// Best reward for every bin of level `j` at bucket `i`, scanning
    /// predecessors in (level, bin) order. Ties keep the first found.
    fn relax(
        &self,
        i: usize,
        j: usize,
        tableau: &Tableau,
        prev: &[f64],
        row: &mut [f64],
        back: &mut [u32],
    ) {
        row.fill(f64::NEG_INFINITY);
        back.fill(Trail::NONE);
        let Some(cost) = tableau.cost(i, j) else {
            return;
        };
        let value = tableau.value(i, j);
        let height = self.height();
        let ceiling = if self.monotone { j } else { self.levels.len() - 1 };
        for pj in 0..=ceiling {
            let ref bins = prev[pj * height..(pj + 1) * height];
            for (pk, &base) in bins.iter().enumerate().take(height - cost) {
                if base == f64::NEG_INFINITY {
                    continue;
                }
                let k = pk + cost;
                let candidate = base + value;
                if candidate > row[k] {
                    row[k] = candidate;
                    back[k] = (pj * height + pk) as u32;
                }
            }
        }
    }

    /// Build bucket `i`'s layer from bucket `i - 1`'s.
    /// Rows are independent, so each level is relaxed on its own thread.
    #[cfg(feature = "parallel")]
    fn advance(
        &self,
        i: usize,
        tableau: &Tableau,
        prev: &[f64],
        next: &mut [f64],
        links: &mut [u32],
    ) {
        use rayon::prelude::*;
        let height = self.height();
        next.par_chunks_mut(height)
            .zip(links.par_chunks_mut(height))
            .enumerate()
            .for_each(|(j, (row, back))| self.relax(i, j, tableau, prev, row, back));
    }
    #[cfg(not(feature = "parallel"))]
    fn advance(
        &self,
        i: usize,
        tableau: &Tableau,
        prev: &[f64],
        next: &mut [f64],
        links: &mut [u32],
    ) {
        let height = self.height();
        next.chunks_mut(height)
            .zip(links.chunks_mut(height))
            .enumerate()
            .for_each(|(j, (row, back))| self.relax(i, j, tableau, prev, row, back));
    }

    /// Fail fast once a bucket has no reachable state.
    fn reachable(&self, i: usize, layer: &[f64]) -> Result<()> {
        match layer.iter().filter(|v| v.is_finite()).count() {
            0 => Err(Error::Infeasible { bucket: i }),
            n => {
                log::debug!("bucket {:>3}: {} reachable states", i, n);
                Ok(())
            }
        }
    }

    /// Highest reward over all terminal states, first in (level, bin) order.
    fn terminal(layer: &[f64]) -> Option<usize> {
        layer
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (s, &v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((s, v)),
            })
            .map(|(s, _)| s)
    }
}

impl Solver for RiskDP<'_> {
    fn solve(&self, weight: Edge, budget: Dollars) -> Result<Schedule> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(Error::RiskBudget(budget));
        }
        let n = self.buckets.len();
        let ref tableau = Tableau::new(self.buckets, self.levels, weight, budget, self.bins);
        let mut trail = Trail::new(n, self.width())?;
        let mut prev = vec![f64::NEG_INFINITY; self.width()];
        let mut next = vec![f64::NEG_INFINITY; self.width()];
        self.seed(tableau, &mut prev, trail.layer_mut(0));
        self.reachable(0, &prev)?;
        for i in 1..n {
            self.advance(i, tableau, &prev, &mut next, trail.layer_mut(i));
            std::mem::swap(&mut prev, &mut next);
            self.reachable(i, &prev)?;
        }
        let terminal = Self::terminal(&prev).ok_or(Error::Infeasible { bucket: n - 1 })?;
        Ok(trail
            .backtrack(terminal)?
            .into_iter()
            .map(|s| self.levels.get(s / self.height()))
            .collect::<Vec<_>>()
            .into())
    }
}
