use super::*;
use crate::Arbitrary;
use crate::Error;
use crate::Pipe;
use crate::Probability;
use crate::Result;

/// Buckets sorted ascending by true count with probabilities summing to one.
///
/// The position of a bucket in this collection is the index every schedule,
/// cost table, and DP layer is aligned with.
#[derive(Debug, Clone, PartialEq)]
pub struct Buckets(Vec<Bucket>);

impl Buckets {
    /// Validate, sort, and renormalize buckets whose probabilities are
    /// already known.
    pub fn new(buckets: Vec<Bucket>) -> Result<Self> {
        if buckets.is_empty() {
            return Err(Error::Empty);
        }
        for bucket in buckets.iter() {
            bucket.check()?;
        }
        let mut buckets = buckets;
        buckets.sort_by(|a, b| a.true_count().total_cmp(&b.true_count()));
        Self::normalize(buckets).map(Self)
    }

    /// Derive buckets from simulator records.
    ///
    /// p is the share of hands dealt in each surviving record,
    /// m is dollars wagered per hand (1 when no hands were dealt).
    pub fn from_records(
        records: impl IntoIterator<Item = Record>,
        filter: &Filter,
    ) -> Result<Self> {
        let records = records
            .into_iter()
            .filter(|r| filter.admits(r))
            .collect::<Vec<_>>();
        if records.is_empty() {
            return Err(Error::Empty);
        }
        let total = records.iter().map(|r| r.hands_played).sum::<u64>();
        if total == 0 {
            return Err(Error::Unsampled);
        }
        log::info!(
            "{} buckets survive filtering ({} hands)",
            records.len(),
            total
        );
        records
            .into_iter()
            .map(|r| {
                let p = r.hands_played as Probability / total as Probability;
                let m = match r.hands_played {
                    0 => 1.0,
                    h => r.total_money_wagered / h as f64,
                };
                Bucket::new(r.true_count, p, r.ev_per_dollar, m)
                    .sampled(r.hands_played)
            })
            .collect::<Vec<_>>()
            .pipe(Self::new)
    }

    fn normalize(buckets: Vec<Bucket>) -> Result<Vec<Bucket>> {
        let mass = buckets.iter().map(Bucket::probability).sum::<Probability>();
        if mass <= 0.0 {
            return Err(Error::Unsampled);
        }
        if (mass - 1.0).abs() > crate::NORMALIZATION_TOLERANCE {
            log::warn!("bucket probabilities sum to {:.9}; renormalizing", mass);
            Ok(buckets.into_iter().map(|b| b.rescaled(mass)).collect())
        } else {
            Ok(buckets)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.0.iter()
    }

    /// Σp, one up to floating point drift.
    pub fn mass(&self) -> Probability {
        self.iter().map(Bucket::probability).sum()
    }

    /// Lowest and highest true count.
    pub fn range(&self) -> (f64, f64) {
        let lo = self.0.first().map(Bucket::true_count).unwrap_or(f64::NAN);
        let hi = self.0.last().map(Bucket::true_count).unwrap_or(f64::NAN);
        (lo, hi)
    }
}

impl std::ops::Index<usize> for Buckets {
    type Output = Bucket;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Buckets {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Hi-Lo-shaped random buckets: roughly normal true count frequencies,
/// edge linear in true count with noise.
impl Arbitrary for Buckets {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        (-10..=10)
            .map(|tc| tc as f64)
            .map(|tc| {
                let p = (-tc * tc / 18.0).exp() * rng.random_range(0.5..1.5);
                let e = -0.004 + 0.005 * tc + rng.random_range(-0.002..0.002);
                let m = rng.random_range(1.05..1.20);
                Bucket::new(tc, p, e, m)
            })
            .collect::<Vec<_>>()
            .pipe(Self::new)
            .expect("random buckets are valid")
    }
}
