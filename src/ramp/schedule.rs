use super::Levels;
use crate::Chips;
use serde::Serialize;

/// One nominal bet per bucket, index-aligned with [`crate::Buckets`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Schedule(Vec<Chips>);

impl Schedule {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Chips> {
        self.0.iter()
    }

    /// Non-decreasing in bucket index.
    pub fn is_monotone(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Every bet is one of the levels.
    pub fn is_admissible(&self, levels: &Levels) -> bool {
        self.0.iter().all(|b| levels.contains(*b))
    }

    /// Ratio of largest to smallest bet.
    pub fn spread(&self) -> f64 {
        let lo = self.0.iter().min().copied().unwrap_or_default();
        let hi = self.0.iter().max().copied().unwrap_or_default();
        match lo {
            0 => f64::INFINITY,
            lo => hi as f64 / lo as f64,
        }
    }
}

impl From<Vec<Chips>> for Schedule {
    fn from(bets: Vec<Chips>) -> Self {
        Self(bets)
    }
}

impl From<Schedule> for Vec<Chips> {
    fn from(schedule: Schedule) -> Self {
        schedule.0
    }
}

impl std::ops::Index<usize> for Schedule {
    type Output = Chips;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_detection() {
        assert!(Schedule::from(vec![25, 25, 50, 100]).is_monotone());
        assert!(!Schedule::from(vec![25, 50, 25]).is_monotone());
        assert!(Schedule::from(vec![]).is_monotone());
    }

    #[test]
    fn admissibility() {
        let levels = Levels::new(25, 100, 25).unwrap();
        assert!(Schedule::from(vec![25, 100]).is_admissible(&levels));
        assert!(!Schedule::from(vec![25, 110]).is_admissible(&levels));
    }

    #[test]
    fn spread_and_display() {
        let schedule = Schedule::from(vec![25, 50, 400]);
        assert_eq!(schedule.spread(), 16.0);
        assert_eq!(schedule.to_string(), "[25, 50, 400]");
    }
}
