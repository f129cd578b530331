use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Cluster, Resource, Service};
use crate::error::{PlacementError, StructuralError};
use crate::graph::LatencyTable;
use crate::state::{GlobalState, LocalState};

/// On-disk snapshot of a [`LocalState`]. `LocalState` itself builds a
/// `ServiceGraph` eagerly and isn't a natural serde target; this is the
/// shape actually round-tripped to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalScenario {
    pub resources: Vec<Resource>,
    pub services: Vec<Service>,
}

impl LocalScenario {
    pub fn from_state(state: &LocalState) -> Self {
        Self {
            resources: state.resources_in_order().into_iter().cloned().collect(),
            services: state.services_in_order().into_iter().cloned().collect(),
        }
    }

    pub fn into_state(self) -> LocalState {
        LocalState::new(self.resources, self.services)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlacementError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlacementError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// On-disk snapshot of a [`GlobalState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalScenario {
    pub clusters: Vec<Cluster>,
    pub services: Vec<Service>,
    pub latency: LatencyTable,
}

impl GlobalScenario {
    pub fn from_state(state: &GlobalState) -> Self {
        Self {
            clusters: state.clusters_in_order().into_iter().cloned().collect(),
            services: state.services_in_order().into_iter().cloned().collect(),
            latency: state.latency().clone(),
        }
    }

    pub fn into_state(self) -> Result<GlobalState, StructuralError> {
        GlobalState::new(self.clusters, self.services, self.latency)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlacementError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlacementError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
