use serde::{Deserialize, Serialize};

/// A single resource slot's outcome for one service, as exported by the
/// local stage for consumption by the global stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub assigned: bool,
    pub cost: f64,
}

impl Candidate {
    pub fn new(assigned: bool, cost: f64) -> Self {
        Self { assigned, cost }
    }

    pub fn unassigned() -> Self {
        Self {
            assigned: false,
            cost: 0.0,
        }
    }
}
