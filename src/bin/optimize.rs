//! Bet Ramp Optimizer
//!
//! Reads per-true-count simulator output, builds a baseline ramp, and prints
//! the RTP-maximizing ramp at the baseline's risk.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    betramp::log()?;
    betramp::cli::Args::parse().run()
}
