//! Risk-constrained bet ramp optimization.
//!
//! Given per-true-count statistics from a blackjack simulation, find the
//! bet schedule that maximizes long-run return to player while keeping a
//! quadratic risk proxy at or below that of a baseline ramp.
//!
//! The optimization is split in two levels:
//! - [`RiskDP`] solves the linear surrogate `max Σ c_i·b_i` under a
//!   discretized risk budget, exactly, by dynamic programming.
//! - [`Dinkelbach`] drives any [`Solver`] to the optimal ratio
//!   `E[profit] / E[wager]`.
pub mod bucket;
pub mod config;
pub mod dinkelbach;
pub mod error;
pub mod objective;
pub mod ramp;
pub mod report;
pub mod solver;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod ingest;

pub use bucket::*;
pub use config::*;
pub use dinkelbach::*;
pub use error::*;
pub use objective::*;
pub use ramp::*;
pub use report::*;
pub use solver::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Bet levels in whole dollars.
pub type Chips = u32;
/// Expected wagers, risk, and budgets in dollars (or dollars squared).
pub type Dollars = f64;
/// Expected profit per dollar wagered. Also the Dinkelbach weight.
pub type Edge = f64;
/// Long-run frequency of a true-count state.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Apply a function to a value in method position, for long builder chains.
pub trait Pipe: Sized {
    fn pipe<F, T>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }
}
impl<T> Pipe for T {}

// ============================================================================
// BET LEVELS
// The admissible set is {MIN_BET, MIN_BET + BET_STEP, ..., MAX_BET}.
// ============================================================================
/// Table minimum.
pub const MIN_BET: Chips = 25;
/// Table maximum.
pub const MAX_BET: Chips = 2000;
/// Chip granularity between adjacent levels.
pub const BET_STEP: Chips = 25;

// ============================================================================
// RISK-CONSTRAINED DYNAMIC PROGRAM
// ============================================================================
/// Bins the risk budget is divided into. Higher = tighter, slower.
/// 400-1200 is the useful range for ~40 buckets and ~80 levels.
pub const RISK_BINS: usize = 800;

// ============================================================================
// DINKELBACH ITERATION
// ============================================================================
/// Stop once |N - λD| falls below this.
pub const TOLERANCE: f64 = 1e-10;
/// Hard cap on outer iterations.
pub const ITERATIONS: usize = 25;
/// Bet ramps are non-decreasing in true count unless disabled.
pub const MONOTONE: bool = true;

// ============================================================================
// BUCKET FILTERING AND NORMALIZATION
// Extreme true counts are rare and noisy; drop thin buckets before solving.
// ============================================================================
/// Buckets with fewer hands than this are discarded.
pub const MIN_HANDS: u64 = 1_000_000;
/// Lowest true count kept.
pub const TC_MIN: f64 = -20.0;
/// Highest true count kept.
pub const TC_MAX: f64 = 20.0;
/// Probabilities are renormalized when their sum drifts further than this.
pub const NORMALIZATION_TOLERANCE: Probability = 1e-6;

// ============================================================================
// KELLY BASELINE RAMP
// Linear fit of EV against true count for Hi-Lo, 2 decks, 80% penetration.
// ============================================================================
/// Bankroll the baseline ramp is sized against.
pub const BANKROLL: Dollars = 50_000.0;
/// Fraction of full Kelly wagered.
pub const KELLY_FRACTION: f64 = 0.75;
/// Slope of EV per dollar against true count.
pub const EV_PER_TC: Edge = 0.004854187311;
/// EV per dollar at true count zero, applied on top of the slope.
pub const EV_INTERCEPT: Edge = 0.0;
/// Average per-hand volatility in units of the initial bet.
pub const VOLATILITY: f64 = 1.32;
/// True count at which the ramp starts rising above the minimum.
pub const TC_THRESHOLD: f64 = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
