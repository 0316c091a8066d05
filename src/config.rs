use crate::Buckets;
use crate::Chips;
use crate::Dinkelbach;
use crate::Dollars;
use crate::Filter;
use crate::Kelly;
use crate::Levels;
use crate::Piecewise;
use crate::Ramp;
use crate::Report;
use crate::Result;
use crate::RiskDP;
use crate::Schedule;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Which ramp the optimized schedule is compared against, and whose risk
/// sets the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    #[default]
    Kelly,
    Piecewise,
}

/// Everything one optimization run needs besides the buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_bet: Chips,
    pub max_bet: Chips,
    pub bet_step: Chips,
    pub risk_bins: usize,
    pub tolerance: f64,
    pub iterations: usize,
    pub monotone: bool,
    /// Seconds of wall clock the outer loop may spend.
    pub time_limit: Option<f64>,
    /// Solve under this budget instead of the baseline's risk.
    pub risk_budget: Option<Dollars>,
    pub baseline: Baseline,
    pub filter: Filter,
    pub kelly: Kelly,
    pub piecewise: Piecewise,
}

impl Config {
    /// Read a JSON config. Missing fields take their defaults.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }

    pub fn levels(&self) -> Result<Levels> {
        Levels::new(self.min_bet, self.max_bet, self.bet_step)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.time_limit
            .filter(|s| s.is_finite() && *s >= 0.0)
            .map(Duration::from_secs_f64)
    }

    /// The configured baseline ramp, snapped to levels.
    pub fn baseline(&self, buckets: &Buckets, levels: &Levels) -> Schedule {
        match self.baseline {
            Baseline::Kelly => self.kelly.schedule(buckets, levels),
            Baseline::Piecewise => self.piecewise.schedule(buckets, levels),
        }
    }

    /// Optimize against the configured baseline and report both.
    pub fn run(&self, buckets: &Buckets) -> Result<Report> {
        let ref levels = self.levels()?;
        let ref baseline = self.baseline(buckets, levels);
        let solver = RiskDP::new(buckets, levels, self.risk_bins, self.monotone)?;
        let dinkelbach = Dinkelbach::new(buckets, solver)
            .tolerance(self.tolerance)
            .iterations(self.iterations)
            .deadline(self.deadline());
        let solution = match self.risk_budget {
            Some(budget) => dinkelbach.optimize_within(baseline, budget)?,
            None => dinkelbach.optimize(baseline)?,
        };
        Report::build(buckets, baseline, solution)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_bet: crate::MIN_BET,
            max_bet: crate::MAX_BET,
            bet_step: crate::BET_STEP,
            risk_bins: crate::RISK_BINS,
            tolerance: crate::TOLERANCE,
            iterations: crate::ITERATIONS,
            monotone: crate::MONOTONE,
            time_limit: None,
            risk_budget: None,
            baseline: Baseline::default(),
            filter: Filter::default(),
            kelly: Kelly::default(),
            piecewise: Piecewise::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Error;
    use crate::Evaluation;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "max_bet": 500, "baseline": "piecewise", "kelly": { "fraction": 0.5 } }"#)
                .unwrap();
        assert_eq!(config.max_bet, 500);
        assert_eq!(config.min_bet, crate::MIN_BET);
        assert_eq!(config.baseline, Baseline::Piecewise);
        assert_eq!(config.kelly.fraction, 0.5);
        assert_eq!(config.kelly.bankroll, crate::BANKROLL);
        assert_eq!(config.filter, Filter::default());
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }

    #[test]
    fn invalid_levels_surface() {
        let config = Config {
            bet_step: 0,
            ..Config::default()
        };
        assert!(matches!(config.levels(), Err(Error::Levels(_))));
    }

    #[test]
    fn negative_time_limit_is_ignored() {
        let config = Config {
            time_limit: Some(-1.0),
            ..Config::default()
        };
        assert_eq!(config.deadline(), None);
    }

    #[test]
    fn runs_every_baseline() {
        let ref buckets = Buckets::random();
        for baseline in [Baseline::Kelly, Baseline::Piecewise] {
            let config = Config {
                baseline,
                risk_bins: 300,
                ..Config::default()
            };
            let report = config.run(buckets).unwrap();
            assert!(report.optimized.rtp >= report.baseline.rtp);
            assert!(report.optimized.risk <= report.budget * (1.0 + 1e-9));
            assert_eq!(report.rows.len(), buckets.len());
        }
    }

    #[test]
    fn unknown_baseline_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "baseline": "flat" }"#).is_err());
    }

    #[test]
    fn budget_override_binds_below_baseline_risk() {
        let ref buckets = Buckets::random();
        let ref levels = Config::default().levels().unwrap();
        let risk = Evaluation::of(buckets, &Kelly::default().schedule(buckets, levels))
            .unwrap()
            .risk;
        let config = Config {
            risk_bins: 300,
            risk_budget: Some(risk / 2.0),
            ..Config::default()
        };
        let report = config.run(buckets).unwrap();
        assert_eq!(report.budget, risk / 2.0);
        assert!(report.optimized.risk <= risk / 2.0 * (1.0 + 1e-9));
        assert!(report.baseline.risk > report.budget);
    }
}
