use super::Record;
use serde::Deserialize;
use serde::Serialize;

/// Drops records too thin or too extreme to trust.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub min_hands: u64,
    pub tc_min: f64,
    pub tc_max: f64,
}

impl Filter {
    /// Keep records with enough hands and a true count in the closed range.
    pub fn admits(&self, record: &Record) -> bool {
        record.hands_played >= self.min_hands
            && record.true_count >= self.tc_min
            && record.true_count <= self.tc_max
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            min_hands: crate::MIN_HANDS,
            tc_min: crate::TC_MIN,
            tc_max: crate::TC_MAX,
        }
    }
}
