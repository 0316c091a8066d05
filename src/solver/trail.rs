use crate::Error;
use crate::Result;

/// Predecessor arena: for every bucket and every (level, bin) state, the
/// state in the previous bucket it was reached from.
///
/// Links are `u32` to keep the n × L × (K + 1) table small; the two
/// largest values are reserved as markers.
#[derive(Debug, Clone)]
pub struct Trail {
    width: usize,
    links: Vec<u32>,
}

impl Trail {
    /// Not reached.
    pub const NONE: u32 = u32::MAX;
    /// Reached directly, with no predecessor (first bucket).
    pub const ROOT: u32 = u32::MAX - 1;

    pub fn new(depth: usize, width: usize) -> Result<Self> {
        if width >= Self::ROOT as usize {
            return Err(Error::Resolution);
        }
        Ok(Self {
            width,
            links: vec![Self::NONE; depth * width],
        })
    }

    pub fn depth(&self) -> usize {
        self.links.len() / self.width.max(1)
    }

    pub fn layer_mut(&mut self, i: usize) -> &mut [u32] {
        &mut self.links[i * self.width..(i + 1) * self.width]
    }

    pub fn link(&self, i: usize, state: usize) -> u32 {
        self.links[i * self.width + state]
    }

    /// Follow links from a terminal state back to the first bucket,
    /// returning one state per bucket. A missing link is reported as
    /// infeasibility at the bucket where the chain breaks.
    pub fn backtrack(&self, terminal: usize) -> Result<Vec<usize>> {
        let depth = self.depth();
        let mut states = vec![0; depth];
        let mut state = terminal;
        for i in (0..depth).rev() {
            states[i] = state;
            match self.link(i, state) {
                Self::ROOT if i == 0 => return Ok(states),
                Self::ROOT | Self::NONE => return Err(Error::Infeasible { bucket: i }),
                prev => state = prev as usize,
            }
        }
        Err(Error::Infeasible { bucket: 0 })
    }
}
