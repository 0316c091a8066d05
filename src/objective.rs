use crate::Buckets;
use crate::Dollars;
use crate::Edge;
use crate::Error;
use crate::Result;
use crate::Schedule;
use serde::Serialize;

/// Long-run moments of a schedule over a bucket distribution.
///
/// - `numerator`   N = Σ p·e·b·m, expected profit per hand
/// - `denominator` D = Σ p·b·m, expected wager per hand
/// - `risk`          = Σ p·(b·m)², the quadratic variance proxy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub numerator: Dollars,
    pub denominator: Dollars,
    pub risk: Dollars,
}

impl Evaluation {
    /// Score a schedule. Lengths must match; the wager need not be positive
    /// until a ratio is asked for.
    pub fn of(buckets: &Buckets, schedule: &Schedule) -> Result<Self> {
        if buckets.len() != schedule.len() {
            return Err(Error::Misaligned {
                bets: schedule.len(),
                buckets: buckets.len(),
            });
        }
        Ok(buckets.iter().zip(schedule.iter()).fold(
            Self::default(),
            |acc, (bucket, &bet)| {
                let p = bucket.probability();
                let w = bucket.wager(bet);
                Self {
                    numerator: acc.numerator + p * bucket.ev_per_dollar() * w,
                    denominator: acc.denominator + p * w,
                    risk: acc.risk + p * w * w,
                }
            },
        ))
    }

    /// N / D, expected profit per dollar wagered.
    pub fn ratio(&self) -> Result<Edge> {
        if self.denominator > 0.0 {
            Ok(self.numerator / self.denominator)
        } else {
            Err(Error::Denominator(self.denominator))
        }
    }

    /// 1 + N / D. Above one is a player edge.
    pub fn rtp(&self) -> Result<f64> {
        self.ratio().map(|r| 1.0 + r)
    }

    /// N − λD, the Dinkelbach surrogate at weight λ.
    pub fn gap(&self, weight: Edge) -> Dollars {
        self.numerator - weight * self.denominator
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self {
            numerator: 0.0,
            denominator: 0.0,
            risk: 0.0,
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.rtp() {
            Ok(rtp) => write!(
                f,
                "RTP {:.9} (edge {:+.4}%)  risk {:.6}",
                rtp,
                (rtp - 1.0) * 100.0,
                self.risk
            ),
            Err(_) => write!(f, "RTP undefined  risk {:.6}", self.risk),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bucket;

    fn buckets() -> Buckets {
        Buckets::new(vec![
            Bucket::new(-1.0, 0.6, -0.02, 1.0),
            Bucket::new(1.0, 0.4, 0.03, 1.5),
        ])
        .unwrap()
    }

    #[test]
    fn moments() {
        let eval = Evaluation::of(&buckets(), &Schedule::from(vec![25, 50])).unwrap();
        // wagers are 25 and 75
        assert!((eval.denominator - (0.6 * 25.0 + 0.4 * 75.0)).abs() < 1e-9);
        assert!((eval.numerator - (0.6 * -0.02 * 25.0 + 0.4 * 0.03 * 75.0)).abs() < 1e-9);
        assert!((eval.risk - (0.6 * 625.0 + 0.4 * 5625.0)).abs() < 1e-9);
        let rtp = eval.rtp().unwrap();
        assert!((rtp - (1.0 + 0.6 / 45.0)).abs() < 1e-12);
    }

    #[test]
    fn gap_vanishes_at_own_ratio() {
        let eval = Evaluation::of(&buckets(), &Schedule::from(vec![25, 100])).unwrap();
        let ratio = eval.ratio().unwrap();
        assert!(eval.gap(ratio).abs() < 1e-12);
    }

    #[test]
    fn zero_wager_is_a_denominator_error() {
        let eval = Evaluation::of(&buckets(), &Schedule::from(vec![0, 0])).unwrap();
        assert_eq!(eval.ratio(), Err(Error::Denominator(0.0)));
        assert!(eval.rtp().is_err());
    }

    #[test]
    fn misaligned_schedule() {
        assert_eq!(
            Evaluation::of(&buckets(), &Schedule::from(vec![25])),
            Err(Error::Misaligned {
                bets: 1,
                buckets: 2
            })
        );
    }
}
