use crate::Baseline;
use crate::Buckets;
use crate::Chips;
use crate::Config;
use clap::Parser;
use std::path::PathBuf;

/// Find the RTP-maximizing bet ramp at the risk of a baseline ramp.
#[derive(Debug, Parser)]
#[command(name = "optimize", version)]
pub struct Args {
    /// Per-true-count simulator output (CSV).
    pub csv: PathBuf,
    /// JSON config; flags below override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Ramp to compare against and take the risk budget from.
    #[arg(long, value_enum)]
    pub baseline: Option<Baseline>,
    #[arg(long)]
    pub min_bet: Option<Chips>,
    #[arg(long)]
    pub max_bet: Option<Chips>,
    #[arg(long)]
    pub bet_step: Option<Chips>,
    /// Risk discretization resolution.
    #[arg(long)]
    pub bins: Option<usize>,
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Maximum Dinkelbach iterations.
    #[arg(long)]
    pub iterations: Option<usize>,
    /// Allow the ramp to decrease in true count.
    #[arg(long)]
    pub free: bool,
    /// Explicit risk budget instead of the baseline's risk.
    #[arg(long)]
    pub budget: Option<f64>,
    /// Wall clock seconds for the outer loop.
    #[arg(long)]
    pub time_limit: Option<f64>,
    #[arg(long)]
    pub min_hands: Option<u64>,
    #[arg(long, allow_negative_numbers = true)]
    pub tc_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub tc_max: Option<f64>,
    /// Write the ramp table here as CSV.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Config file (or defaults) with command line overrides applied.
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(baseline) = self.baseline {
            config.baseline = baseline;
        }
        if let Some(min_bet) = self.min_bet {
            config.min_bet = min_bet;
        }
        if let Some(max_bet) = self.max_bet {
            config.max_bet = max_bet;
        }
        if let Some(bet_step) = self.bet_step {
            config.bet_step = bet_step;
        }
        if let Some(bins) = self.bins {
            config.risk_bins = bins;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if self.free {
            config.monotone = false;
        }
        if self.budget.is_some() {
            config.risk_budget = self.budget;
        }
        if self.time_limit.is_some() {
            config.time_limit = self.time_limit;
        }
        if let Some(min_hands) = self.min_hands {
            config.filter.min_hands = min_hands;
        }
        if let Some(tc_min) = self.tc_min {
            config.filter.tc_min = tc_min;
        }
        if let Some(tc_max) = self.tc_max {
            config.filter.tc_max = tc_max;
        }
        Ok(config)
    }

    pub fn run(self) -> anyhow::Result<()> {
        let ref config = self.config()?;
        log::debug!("{:?}", config);
        let records = crate::ingest::read(&self.csv)?;
        let ref buckets = Buckets::from_records(records, &config.filter)?;
        let report = config.run(buckets)?;
        println!("{}", report);
        if let Some(ref path) = self.output {
            report.write_csv(path)?;
            log::info!("wrote ramp to {}", path.display());
        }
        Ok(())
    }
}
