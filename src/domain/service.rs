use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::characteristics::Characteristics;
use crate::domain::interaction::Interaction;

/// A service to be replicated across resources. Identity is `service_name`.
/// A target named in `interactions` that does not exist in the owning
/// [`crate::state::LocalState`] is dropped silently when the service graph
/// is built — not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "serviceName")]
    pub service_name: String,
    #[serde(rename = "imageName")]
    pub image_name: String,
    pub requirements: Characteristics,
    pub data: f64,
    pub replicas: u32,
    /// Outgoing interactions, keyed by target service name.
    pub interactions: BTreeMap<String, Interaction>,
}

impl Service {
    pub fn new(
        service_name: impl Into<String>,
        image_name: impl Into<String>,
        requirements: Characteristics,
        data: f64,
        replicas: u32,
    ) -> Self {
        debug_assert!(data >= 0.0);
        debug_assert!(replicas >= 1);
        Self {
            service_name: service_name.into(),
            image_name: image_name.into(),
            requirements,
            data,
            replicas,
            interactions: BTreeMap::new(),
        }
    }

    pub fn with_interaction(
        mut self,
        target: impl Into<String>,
        interaction: Interaction,
    ) -> Self {
        self.interactions.insert(target.into(), interaction);
        self
    }
}
