use crate::Dollars;

/// Everything that can abort an optimization run.
///
/// None of these are retried: the computation is deterministic, so the
/// same input fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no buckets left after filtering; loosen the filters")]
    Empty,
    #[error("bucket sample sizes sum to zero")]
    Unsampled,
    #[error("bucket at true count {true_count}: {reason}")]
    Bucket { true_count: f64, reason: &'static str },
    #[error("bet levels: {0}")]
    Levels(String),
    #[error("risk resolution must be at least one bin")]
    Resolution,
    #[error("schedule has {bets} bets for {buckets} buckets")]
    Misaligned { bets: usize, buckets: usize },
    #[error("expected wager {0} is not positive")]
    Denominator(Dollars),
    #[error("risk budget {0} is not usable")]
    RiskBudget(Dollars),
    #[error("no schedule fits the risk budget: bucket {bucket} has no reachable state")]
    Infeasible { bucket: usize },
    #[error("no schedule within risk budget {0} was found before stopping")]
    Unsolved(Dollars),
}

pub type Result<T> = std::result::Result<T, Error>;
