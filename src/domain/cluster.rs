use serde::{Deserialize, Serialize};

use crate::domain::candidate::Candidate;
use crate::domain::resource::Resource;
use crate::error::StructuralError;

/// A site offering a fixed, ordered sequence of resources, together with
/// the local solver's per-service candidate lists. `candidates[k][i]` is
/// the outcome for resource `i` under service `k`; both orders are owned by
/// the [`crate::state::GlobalState`] that built this cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(rename = "clusterName")]
    pub cluster_name: String,
    pub resources: Vec<Resource>,
    pub candidates: Vec<Vec<Candidate>>,
}

impl Cluster {
    /// Construct a cluster, validating that every service's candidate list
    /// has exactly one entry per resource. Fails fast with a structural
    /// violation rather than constructing a malformed cluster.
    pub fn new(
        cluster_name: impl Into<String>,
        resources: Vec<Resource>,
        candidates: Vec<Vec<Candidate>>,
    ) -> Result<Self, StructuralError> {
        let cluster_name = cluster_name.into();
        for (service_index, per_resource) in candidates.iter().enumerate() {
            if per_resource.len() != resources.len() {
                return Err(StructuralError::CandidateLengthMismatch {
                    cluster: cluster_name,
                    service: service_index,
                    expected: resources.len(),
                    actual: per_resource.len(),
                });
            }
        }
        Ok(Self {
            cluster_name,
            resources,
            candidates,
        })
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn service_count(&self) -> usize {
        self.candidates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::Characteristics;

    #[test]
    fn rejects_mismatched_candidate_length() {
        let resources = vec![Resource::new("r0", Characteristics::new(1.0, 1.0, 1.0, 0.0))];
        let candidates = vec![vec![Candidate::unassigned(), Candidate::unassigned()]];
        let result = Cluster::new("c0", resources, candidates);
        assert!(matches!(
            result,
            Err(StructuralError::CandidateLengthMismatch { .. })
        ));
    }
}
