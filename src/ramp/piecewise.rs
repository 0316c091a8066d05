use super::Ramp;
use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// One step of a hand-tuned ramp: bet `bet` while the true count is below
/// `ceiling` (or equal to it, when `closed`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub ceiling: f64,
    pub closed: bool,
    pub bet: Chips,
}

impl Tier {
    fn bounds(&self, true_count: f64) -> bool {
        match self.closed {
            true => true_count <= self.ceiling,
            false => true_count < self.ceiling,
        }
    }
}

/// Step-function ramp. Tiers are scanned in order and the first one that
/// bounds the true count wins; counts above every tier get `top`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piecewise {
    pub tiers: Vec<Tier>,
    pub top: Chips,
}

impl Ramp for Piecewise {
    fn bet(&self, true_count: f64) -> f64 {
        self.tiers
            .iter()
            .find(|t| t.bounds(true_count))
            .map(|t| t.bet)
            .unwrap_or(self.top) as f64
    }
}

impl Default for Piecewise {
    fn default() -> Self {
        let tier = |ceiling, closed, bet| Tier {
            ceiling,
            closed,
            bet,
        };
        Self {
            tiers: vec![
                tier(1.0, false, 25),
                tier(1.5, true, 100),
                tier(3.0, false, 300),
                tier(4.0, false, 500),
                tier(5.0, false, 1000),
                tier(6.0, false, 1600),
            ],
            top: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_edges() {
        let ramp = Piecewise::default();
        assert_eq!(ramp.bet(0.5), 25.0);
        assert_eq!(ramp.bet(1.0), 100.0);
        assert_eq!(ramp.bet(1.5), 100.0);
        assert_eq!(ramp.bet(2.0), 300.0);
        assert_eq!(ramp.bet(5.5), 1600.0);
        assert_eq!(ramp.bet(6.0), 2000.0);
        assert_eq!(ramp.bet(12.0), 2000.0);
    }
}
