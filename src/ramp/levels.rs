use crate::Chips;
use crate::Error;
use crate::Result;

/// The admissible bet set {min, min + step, ..., top}, where top is the
/// largest such value not exceeding the requested maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    min: Chips,
    step: Chips,
    count: usize,
}

impl Levels {
    pub fn new(min: Chips, max: Chips, step: Chips) -> Result<Self> {
        if step == 0 {
            return Err(Error::Levels("step must be positive".into()));
        }
        if max < min {
            return Err(Error::Levels(format!(
                "maximum {} is below minimum {}",
                max, min
            )));
        }
        Ok(Self {
            min,
            step,
            count: ((max - min) / step) as usize + 1,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn min(&self) -> Chips {
        self.min
    }
    pub fn max(&self) -> Chips {
        self.get(self.count - 1)
    }

    /// The j-th level, ascending.
    pub fn get(&self, j: usize) -> Chips {
        self.min + j as Chips * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = Chips> + '_ {
        (0..self.count).map(|j| self.get(j))
    }

    /// Position of an admissible bet.
    pub fn index(&self, bet: Chips) -> Option<usize> {
        match bet.checked_sub(self.min) {
            Some(d) if d % self.step == 0 && ((d / self.step) as usize) < self.count => {
                Some((d / self.step) as usize)
            }
            _ => None,
        }
    }

    pub fn contains(&self, bet: Chips) -> bool {
        self.index(bet).is_some()
    }

    /// Clamp into [min, max] and round to the nearest level.
    pub fn snap(&self, amount: f64) -> Chips {
        if !(amount > self.min as f64) {
            return self.min;
        }
        // exact half-steps round up, not to even
        let steps = ((amount - self.min as f64) / self.step as f64).round();
        self.get((steps as usize).min(self.count - 1))
    }
}
