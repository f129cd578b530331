use serde::{Deserialize, Serialize};

use crate::characteristics::Characteristics;

/// Fixed coefficients for deriving a resource's cost tuple from its
/// characteristics. These are a contract, not an accident — reproduce
/// exactly.
const FIXED_CPU_COEFFICIENT: f64 = 0.0366;
const FIXED_MEMORY_COEFFICIENT: f64 = 0.0043;
const FIXED_DISK_COEFFICIENT: f64 = 0.0001;
const FIXED_GPU_COEFFICIENT: f64 = 1.6760;
const DATA_COST: f64 = 0.0;
const IN_COST: f64 = 0.05;
const OUT_COST: f64 = 0.09;

/// `(fixed, data, in, out)` cost tuple derived deterministically from a
/// resource's characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub fixed: f64,
    pub data: f64,
    #[serde(rename = "in")]
    pub inbound: f64,
    pub out: f64,
}

impl ResourceCost {
    /// Derive the cost tuple from characteristics using the exact mandated
    /// coefficients.
    pub fn derive(characteristics: &Characteristics) -> Self {
        Self {
            fixed: FIXED_CPU_COEFFICIENT * characteristics.cpu()
                + FIXED_MEMORY_COEFFICIENT * characteristics.memory()
                + FIXED_DISK_COEFFICIENT * characteristics.disk()
                + FIXED_GPU_COEFFICIENT * characteristics.gpu(),
            data: DATA_COST,
            inbound: IN_COST,
            out: OUT_COST,
        }
    }
}

/// A resource slot offered by a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "resourceName")]
    pub resource_name: String,
    pub characteristics: Characteristics,
    pub cost: ResourceCost,
}

impl Resource {
    /// Build a resource, deriving its cost tuple from `characteristics`.
    pub fn new(resource_name: impl Into<String>, characteristics: Characteristics) -> Self {
        let cost = ResourceCost::derive(&characteristics);
        Self {
            resource_name: resource_name.into(),
            characteristics,
            cost,
        }
    }
}
