use serde::{Deserialize, Serialize};

/// An outgoing interaction from one service to another. `weight` is carried
/// as the service graph's edge weight; `dataTransfer` is the cost-relevant
/// quantity used by the local assignment evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub weight: f64,
    #[serde(rename = "dataTransfer")]
    pub data_transfer: f64,
}

impl Interaction {
    pub fn new(weight: f64, data_transfer: f64) -> Self {
        debug_assert!(weight >= 0.0 && data_transfer >= 0.0);
        Self {
            weight,
            data_transfer,
        }
    }
}
