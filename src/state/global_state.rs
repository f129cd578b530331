use crate::domain::{Cluster, Service};
use crate::error::StructuralError;
use crate::graph::{ClusterGraph, LatencyTable};
use crate::util::OrderedMap;

/// Groups the clusters, services and pairwise cluster latency of the
/// federation. Owns the cluster graph and exposes a cross-cluster
/// normalization of candidate lists consumed by the global composition
/// problem.
#[derive(Debug, Clone)]
pub struct GlobalState {
    clusters: OrderedMap<Cluster>,
    services: OrderedMap<Service>,
    latency: LatencyTable,
    cluster_graph: ClusterGraph,
}

impl GlobalState {
    /// Build from insertion-ordered cluster and service lists plus a
    /// latency table. Fails fast with a structural violation if a cluster's
    /// candidate lists don't match the service count, or a latency entry
    /// names an unknown cluster.
    pub fn new(
        clusters: Vec<Cluster>,
        services: Vec<Service>,
        latency: LatencyTable,
    ) -> Result<Self, StructuralError> {
        let mut service_map = OrderedMap::new();
        for service in services {
            service_map.insert(service.service_name.clone(), service);
        }
        let expected_services = service_map.len();

        let mut cluster_map = OrderedMap::new();
        for cluster in clusters {
            if cluster.service_count() != expected_services {
                return Err(StructuralError::CandidateLengthMismatch {
                    cluster: cluster.cluster_name.clone(),
                    service: cluster.service_count(),
                    expected: expected_services,
                    actual: cluster.service_count(),
                });
            }
            cluster_map.insert(cluster.cluster_name.clone(), cluster);
        }

        for (from, per_target) in &latency {
            if !cluster_map.contains_key(from) {
                return Err(StructuralError::UnknownLatencyCluster {
                    cluster: from.clone(),
                });
            }
            for to in per_target.keys() {
                if !cluster_map.contains_key(to) {
                    return Err(StructuralError::UnknownLatencyCluster { cluster: to.clone() });
                }
            }
        }

        let cluster_graph = ClusterGraph::build(cluster_map.keys(), &latency);

        Ok(Self {
            clusters: cluster_map,
            services: service_map,
            latency,
            cluster_graph,
        })
    }

    pub fn clusters(&self) -> &OrderedMap<Cluster> {
        &self.clusters
    }

    pub fn services(&self) -> &OrderedMap<Service> {
        &self.services
    }

    pub fn latency(&self) -> &LatencyTable {
        &self.latency
    }

    pub fn cluster_graph(&self) -> &ClusterGraph {
        &self.cluster_graph
    }

    pub fn clusters_in_order(&self) -> Vec<&Cluster> {
        self.clusters.values().collect()
    }

    pub fn services_in_order(&self) -> Vec<&Service> {
        self.services.values().collect()
    }

    /// `true` when every service has at least one assigned candidate slot
    /// somewhere in the federation.
    pub fn is_complete(&self) -> bool {
        self.cluster_resource_indices()
            .iter()
            .all(|slots| !slots.is_empty())
    }

    /// For each service `k` (in state order), the `(cluster_index,
    /// resource_index)` pairs across every cluster whose candidate is
    /// assigned, in cluster-major resource-minor order. This is the
    /// "normalization" of the per-cluster candidate lists into a single
    /// cross-cluster index space that the global composition problem's
    /// bitset variables switch on.
    pub fn cluster_resource_indices(&self) -> Vec<Vec<(usize, usize)>> {
        let clusters = self.clusters_in_order();
        let service_count = self.services.len();
        let mut indices = vec![Vec::new(); service_count];

        for (cluster_index, cluster) in clusters.iter().enumerate() {
            for (service_index, per_resource) in cluster.candidates.iter().enumerate() {
                for (resource_index, candidate) in per_resource.iter().enumerate() {
                    if candidate.assigned {
                        indices[service_index].push((cluster_index, resource_index));
                    }
                }
            }
        }

        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::Characteristics;
    use crate::domain::{Candidate, Resource};
    use std::collections::BTreeMap;

    fn cluster(name: &str, assigned: bool) -> Cluster {
        let resource = Resource::new("r0", Characteristics::new(1.0, 1.0, 1.0, 0.0));
        Cluster::new(name, vec![resource], vec![vec![Candidate::new(assigned, 1.0)]]).unwrap()
    }

    #[test]
    fn rejects_latency_entry_for_unknown_cluster() {
        let service = Service::new("s0", "img", Characteristics::zero(), 0.0, 1);
        let mut latency: LatencyTable = BTreeMap::new();
        latency.insert("ghost".into(), BTreeMap::new());
        let result = GlobalState::new(vec![cluster("a", true)], vec![service], latency);
        assert!(matches!(result, Err(StructuralError::UnknownLatencyCluster { .. })));
    }

    #[test]
    fn is_complete_reflects_assignment_coverage() {
        let service = Service::new("s0", "img", Characteristics::zero(), 0.0, 2);
        let state = GlobalState::new(
            vec![cluster("a", true), cluster("b", false)],
            vec![service],
            BTreeMap::new(),
        )
        .unwrap();
        assert!(state.is_complete());
        assert_eq!(state.cluster_resource_indices()[0], vec![(0, 0)]);
    }

    #[test]
    fn scenario_s5_incomplete_for_missing_assignment() {
        let service = Service::new("s0", "img", Characteristics::zero(), 0.0, 2);
        let state = GlobalState::new(
            vec![cluster("a", true), cluster("b", false)],
            vec![service],
            BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(state.cluster_resource_indices()[0].len(), 1);
    }
}
