//! Simulator CSV ingestion.
//!
//! Columns are matched by header name; anything besides true count, hands,
//! dollars wagered, and EV per dollar is ignored.

use crate::Record;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "TrueCount")]
    true_count: f64,
    /// Some simulator builds write counts as floats.
    #[serde(rename = "HandsPlayed")]
    hands_played: f64,
    #[serde(rename = "TotalMoneyWagered")]
    total_money_wagered: f64,
    #[serde(rename = "EVPerDollar")]
    ev_per_dollar: f64,
}

impl From<Row> for Record {
    fn from(row: Row) -> Self {
        Self {
            true_count: row.true_count,
            hands_played: row.hands_played.max(0.0) as u64,
            total_money_wagered: row.total_money_wagered,
            ev_per_dollar: row.ev_per_dollar,
        }
    }
}

/// Parse every record from a CSV stream with a header row.
pub fn parse(reader: impl std::io::Read) -> anyhow::Result<Vec<Record>> {
    csv::Reader::from_reader(reader)
        .deserialize::<Row>()
        .map(|row| row.map(Record::from).map_err(anyhow::Error::from))
        .collect()
}

pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Vec<Record>> {
    let path = path.as_ref();
    let records = parse(std::fs::File::open(path)?)?;
    log::info!("read {} records from {}", records.len(), path.display());
    Ok(records)
}
