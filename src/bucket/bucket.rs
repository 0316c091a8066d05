use crate::Chips;
use crate::Dollars;
use crate::Edge;
use crate::Error;
use crate::Probability;
use crate::Result;
use serde::Serialize;

/// One discretized true-count state.
///
/// - `probability`: long-run fraction of hands dealt in this state
/// - `ev_per_dollar`: expected profit per dollar actually wagered here
/// - `wager_multiplier`: dollars actually wagered per dollar of nominal bet,
///   inflated by splits, doubles, and insurance
///
/// The raw hand count rides along for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    true_count: f64,
    probability: Probability,
    ev_per_dollar: Edge,
    wager_multiplier: f64,
    hands: u64,
}

impl Bucket {
    pub fn new(
        true_count: f64,
        probability: Probability,
        ev_per_dollar: Edge,
        wager_multiplier: f64,
    ) -> Self {
        Self {
            true_count,
            probability,
            ev_per_dollar,
            wager_multiplier,
            hands: 0,
        }
    }

    /// Attach the hand count this bucket was derived from.
    pub fn sampled(self, hands: u64) -> Self {
        Self { hands, ..self }
    }

    pub fn true_count(&self) -> f64 {
        self.true_count
    }
    pub fn probability(&self) -> Probability {
        self.probability
    }
    pub fn ev_per_dollar(&self) -> Edge {
        self.ev_per_dollar
    }
    pub fn wager_multiplier(&self) -> f64 {
        self.wager_multiplier
    }
    pub fn hands(&self) -> u64 {
        self.hands
    }

    /// Dollars actually put at risk for a nominal bet.
    pub fn wager(&self, bet: Chips) -> Dollars {
        bet as Dollars * self.wager_multiplier
    }

    /// c(λ) = p·m·(e − λ), reward per unit of nominal bet in the
    /// surrogate objective N − λD.
    pub fn linear(&self, weight: Edge) -> f64 {
        self.probability * self.wager_multiplier * (self.ev_per_dollar - weight)
    }

    /// q = p·m², risk contributed per unit of squared nominal bet.
    pub fn quadratic(&self) -> f64 {
        self.probability * self.wager_multiplier * self.wager_multiplier
    }

    pub(crate) fn rescaled(self, mass: Probability) -> Self {
        Self {
            probability: self.probability / mass,
            ..self
        }
    }

    pub(crate) fn check(&self) -> Result<()> {
        let reason = if !self.true_count.is_finite() {
            "true count is not finite"
        } else if !self.probability.is_finite() || self.probability < 0.0 {
            "probability must be finite and non-negative"
        } else if !self.ev_per_dollar.is_finite() {
            "ev per dollar is not finite"
        } else if !self.wager_multiplier.is_finite() || self.wager_multiplier <= 0.0 {
            "wager multiplier must be finite and positive"
        } else {
            return Ok(());
        };
        Err(Error::Bucket {
            true_count: self.true_count,
            reason,
        })
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "TC {:>5.1}  p {:>9.6}  e {:>9.6}  m {:>7.4}",
            self.true_count, self.probability, self.ev_per_dollar, self.wager_multiplier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients() {
        let bucket = Bucket::new(2.0, 0.5, 0.01, 2.0);
        assert!((bucket.linear(0.0) - 0.01).abs() < 1e-12);
        assert!((bucket.linear(0.01)).abs() < 1e-12);
        assert!((bucket.quadratic() - 2.0).abs() < 1e-12);
        assert!((bucket.wager(25) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_nonpositive_multiplier() {
        assert!(matches!(
            Bucket::new(0.0, 0.1, 0.0, 0.0).check(),
            Err(Error::Bucket { .. })
        ));
    }

    #[test]
    fn rejects_negative_probability() {
        assert!(Bucket::new(0.0, -0.1, 0.0, 1.0).check().is_err());
        assert!(Bucket::new(0.0, 0.1, 0.0, 1.0).check().is_ok());
    }
}
