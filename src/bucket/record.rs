use crate::Dollars;
use crate::Edge;
use serde::Deserialize;
use serde::Serialize;

/// One row of simulator output: aggregate results of every hand dealt
/// while the true count sat at `true_count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub true_count: f64,
    pub hands_played: u64,
    pub total_money_wagered: Dollars,
    pub ev_per_dollar: Edge,
}
