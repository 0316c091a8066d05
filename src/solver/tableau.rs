use crate::Buckets;
use crate::Dollars;
use crate::Edge;
use crate::Levels;

/// Reward and risk cost of every (bucket, level) pair for one weight and
/// budget, flattened row-major by bucket.
///
/// Risk costs are whole bins of width `budget / bins`, rounded up, so any
/// selection whose costs fit in `bins` also fits the continuous budget.
/// Pairs that can never fit are `None`.
#[derive(Debug, Clone)]
pub struct Tableau {
    width: usize,
    costs: Vec<Option<usize>>,
    values: Vec<f64>,
}

impl Tableau {
    pub fn new(
        buckets: &Buckets,
        levels: &Levels,
        weight: Edge,
        budget: Dollars,
        bins: usize,
    ) -> Self {
        let width = levels.len();
        let mut costs = Vec::with_capacity(buckets.len() * width);
        let mut values = Vec::with_capacity(buckets.len() * width);
        for bucket in buckets.iter() {
            let c = bucket.linear(weight);
            let q = bucket.quadratic();
            for bet in levels.iter() {
                let b = bet as f64;
                values.push(c * b);
                costs.push(Self::discretize(q * b * b, budget, bins));
            }
        }
        Self {
            width,
            costs,
            values,
        }
    }

    /// Bins consumed by `risk`, or `None` when it exceeds the whole budget.
    pub fn discretize(risk: Dollars, budget: Dollars, bins: usize) -> Option<usize> {
        if risk <= 0.0 {
            Some(0)
        } else if budget <= 0.0 {
            None
        } else {
            match (risk * bins as f64 / budget).ceil() {
                n if n <= bins as f64 => Some(n as usize),
                _ => None,
            }
        }
    }

    pub fn cost(&self, i: usize, j: usize) -> Option<usize> {
        self.costs[i * self.width + j]
    }
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.width + j]
    }
}
