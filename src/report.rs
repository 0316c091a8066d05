use crate::Buckets;
use crate::Chips;
use crate::Dollars;
use crate::Edge;
use crate::Evaluation;
use crate::Probability;
use crate::Result;
use crate::Schedule;
use crate::Solution;
use serde::Serialize;

/// Headline numbers for one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub rtp: f64,
    pub risk: Dollars,
    /// Expected dollars wagered per hand.
    pub wager: Dollars,
}

impl TryFrom<Evaluation> for Summary {
    type Error = crate::Error;
    fn try_from(eval: Evaluation) -> Result<Self> {
        Ok(Self {
            rtp: eval.rtp()?,
            risk: eval.risk,
            wager: eval.denominator,
        })
    }
}

/// One bucket of the side-by-side ramp table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    #[serde(rename = "TrueCount")]
    pub true_count: f64,
    #[serde(rename = "HandsPlayed")]
    pub hands: u64,
    #[serde(rename = "Probability")]
    pub probability: Probability,
    #[serde(rename = "EVPerDollar")]
    pub ev_per_dollar: Edge,
    #[serde(rename = "WagerMultiplier")]
    pub wager_multiplier: f64,
    #[serde(rename = "BaselineBet")]
    pub baseline: Chips,
    #[serde(rename = "OptimizedBet")]
    pub optimized: Chips,
}

/// Baseline versus optimized schedule at equal risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub baseline: Summary,
    pub optimized: Summary,
    pub budget: Dollars,
    pub iterations: usize,
    pub converged: bool,
    pub rows: Vec<Row>,
}

impl Report {
    pub fn build(buckets: &Buckets, baseline: &Schedule, solution: Solution) -> Result<Self> {
        let before = Summary::try_from(Evaluation::of(buckets, baseline)?)?;
        let after = Summary::try_from(Evaluation::of(buckets, &solution.schedule)?)?;
        let rows = buckets
            .iter()
            .zip(baseline.iter())
            .zip(solution.schedule.iter())
            .map(|((bucket, &b0), &b1)| Row {
                true_count: bucket.true_count(),
                hands: bucket.hands(),
                probability: bucket.probability(),
                ev_per_dollar: bucket.ev_per_dollar(),
                wager_multiplier: bucket.wager_multiplier(),
                baseline: b0,
                optimized: b1,
            })
            .collect();
        Ok(Self {
            baseline: before,
            optimized: after,
            budget: solution.budget,
            iterations: solution.iterations(),
            converged: solution.converged,
            rows,
        })
    }

    /// Write the ramp table with one header row.
    #[cfg(feature = "cli")]
    pub fn write_csv(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in self.rows.iter() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Optimized bet cell, green where it rose and red where it fell.
    #[cfg(feature = "cli")]
    fn highlight(row: &Row) -> String {
        use colored::Colorize;
        let cell = format!("{:>9}", row.optimized);
        match row.optimized.cmp(&row.baseline) {
            std::cmp::Ordering::Greater => cell.green().to_string(),
            std::cmp::Ordering::Less => cell.red().to_string(),
            std::cmp::Ordering::Equal => cell,
        }
    }
    #[cfg(not(feature = "cli"))]
    fn highlight(row: &Row) -> String {
        format!("{:>9}", row.optimized)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let edge = |rtp: f64| (rtp - 1.0) * 100.0;
        writeln!(
            f,
            "Baseline RTP:  {:.9}   (edge {:+.4}%)   risk {:.6}",
            self.baseline.rtp,
            edge(self.baseline.rtp),
            self.baseline.risk
        )?;
        writeln!(
            f,
            "Optimized RTP: {:.9}   (edge {:+.4}%)   risk {:.6}",
            self.optimized.rtp,
            edge(self.optimized.rtp),
            self.optimized.risk
        )?;
        writeln!(
            f,
            "Risk budget {:.6}, {} iterations, {}",
            self.budget,
            self.iterations,
            if self.converged { "converged" } else { "not converged" }
        )?;
        if let (Some(lo), Some(hi)) = (self.rows.first(), self.rows.last()) {
            writeln!(
                f,
                "Buckets used: {}  TC range [{}, {}]",
                self.rows.len(),
                lo.true_count,
                hi.true_count
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>5}  {:>9}  {:>9}  {:>8}  {:>8}  {:>9}",
            "TC", "p(tc)", "e(tc)", "m(tc)", "baseline", "optimized"
        )?;
        writeln!(f, "{}", "-".repeat(56))?;
        for row in self.rows.iter() {
            writeln!(
                f,
                "{:>5.1}  {:>9.6}  {:>9.6}  {:>8.4}  {:>8}  {}",
                row.true_count,
                row.probability,
                row.ev_per_dollar,
                row.wager_multiplier,
                row.baseline,
                Self::highlight(row)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bucket;

    fn report() -> Report {
        let ref buckets = Buckets::new(vec![
            Bucket::new(-1.0, 0.6, -0.02, 1.0),
            Bucket::new(1.0, 0.4, 0.03, 1.0),
        ])
        .unwrap();
        let ref baseline = Schedule::from(vec![25, 25]);
        let solution = Solution {
            schedule: Schedule::from(vec![25, 50]),
            ratio: 0.3 / 35.0,
            weight: 0.3 / 35.0,
            budget: 10_000.0,
            converged: true,
            history: vec![],
        };
        Report::build(buckets, baseline, solution).unwrap()
    }

    #[test]
    fn summarizes_both_schedules() {
        let report = report();
        assert!((report.baseline.rtp - 1.0).abs() < 1e-12);
        assert!((report.optimized.rtp - (1.0 + 0.3 / 35.0)).abs() < 1e-12);
        assert!((report.baseline.risk - 625.0).abs() < 1e-9);
        assert!((report.optimized.risk - 1375.0).abs() < 1e-9);
        assert_eq!(report.rows[1].baseline, 25);
        assert_eq!(report.rows[1].optimized, 50);
    }

    #[test]
    fn renders_table() {
        let text = report().to_string();
        assert!(text.contains("Baseline RTP"));
        assert!(text.contains("Optimized RTP"));
        assert!(text.contains("converged"));
        assert_eq!(text.lines().filter(|l| l.contains("0.400000")).count(), 1);
    }
}
