use super::Ramp;
use crate::Dollars;
use crate::Edge;
use serde::Deserialize;
use serde::Serialize;

/// Fractional Kelly ramp from a linear fit of EV against true count.
///
/// One betting unit is `bankroll · fraction · slope / volatility`; the bet
/// grows by one unit per true count above `threshold`, offset by the same
/// scaling of `intercept`. At or below the threshold the table minimum is
/// bet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kelly {
    pub bankroll: Dollars,
    pub fraction: f64,
    pub slope: Edge,
    pub intercept: Edge,
    pub volatility: f64,
    pub threshold: f64,
}

impl Kelly {
    /// Dollars added per true count above the threshold.
    pub fn unit(&self) -> Dollars {
        self.bankroll * self.fraction * self.slope / self.volatility
    }
    /// Constant dollar offset from the fitted intercept.
    pub fn offset(&self) -> Dollars {
        self.bankroll * self.fraction * self.intercept / self.volatility
    }
}

impl Ramp for Kelly {
    fn bet(&self, true_count: f64) -> f64 {
        match true_count - self.threshold {
            eff if eff <= 0.0 => 0.0,
            eff => self.unit() * eff + self.offset(),
        }
    }
}

impl Default for Kelly {
    fn default() -> Self {
        Self {
            bankroll: crate::BANKROLL,
            fraction: crate::KELLY_FRACTION,
            slope: crate::EV_PER_TC,
            intercept: crate::EV_INTERCEPT,
            volatility: crate::VOLATILITY,
            threshold: crate::TC_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Levels;

    #[test]
    fn minimum_below_threshold() {
        let levels = Levels::new(25, 2000, 25).unwrap();
        let kelly = Kelly::default();
        assert_eq!(levels.snap(kelly.bet(-3.0)), 25);
        assert_eq!(levels.snap(kelly.bet(0.5)), 25);
    }

    #[test]
    fn grows_one_unit_per_count() {
        let kelly = Kelly::default();
        let unit = kelly.unit();
        assert!((unit - 137.903).abs() < 1e-3);
        assert!((kelly.bet(2.5) - 2.0 * unit).abs() < 1e-9);
    }

    #[test]
    fn caps_at_table_maximum() {
        let levels = Levels::new(25, 2000, 25).unwrap();
        assert_eq!(levels.snap(Kelly::default().bet(40.0)), 2000);
    }
}
