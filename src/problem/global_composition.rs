use std::collections::HashSet;

use rand::RngCore;

use crate::domain::{Cluster, Service};
use crate::graph::ClusterGraph;
use crate::problem::engine::{ConstraintSpec, MultiObjectiveProblem, ObjectiveSense, Solution};
use crate::state::GlobalState;

/// Objective evaluator for the cross-cluster composition problem.
/// Bitset variable `k` selects among the `(cluster, resource)` pairs
/// pre-assigned by the local stage for service `k`.
pub struct GlobalCompositionProblem {
    services: Vec<Service>,
    clusters: Vec<Cluster>,
    cluster_names: Vec<String>,
    cluster_graph: ClusterGraph,
    /// `cluster_resource_indices[k]`: `(cluster_index, resource_index)`
    /// pairs for service `k`, cluster-major resource-minor order.
    cluster_resource_indices: Vec<Vec<(usize, usize)>>,
    is_complete: bool,
}

impl GlobalCompositionProblem {
    pub fn new(state: &GlobalState) -> Self {
        let services: Vec<Service> = state.services_in_order().into_iter().cloned().collect();
        let clusters: Vec<Cluster> = state.clusters_in_order().into_iter().cloned().collect();
        let cluster_names: Vec<String> = clusters.iter().map(|c| c.cluster_name.clone()).collect();
        let cluster_resource_indices = state.cluster_resource_indices();
        let is_complete = state.is_complete();
        Self {
            services,
            clusters,
            cluster_names,
            cluster_graph: state.cluster_graph().clone(),
            cluster_resource_indices,
            is_complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn cluster_resource_indices(&self) -> &[Vec<(usize, usize)>] {
        &self.cluster_resource_indices
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn cluster_graph(&self) -> &ClusterGraph {
        &self.cluster_graph
    }
}

impl MultiObjectiveProblem for GlobalCompositionProblem {
    fn number_of_variables(&self) -> usize {
        self.services.len()
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn number_of_constraints(&self) -> usize {
        self.services.len()
    }

    fn new_solution(&self) -> Solution {
        let lengths: Vec<usize> = self.cluster_resource_indices.iter().map(Vec::len).collect();
        let constraint_specs = self
            .services
            .iter()
            .map(|service| ConstraintSpec::EqualTo(service.replicas as f64))
            .collect();
        Solution::new(
            &lengths,
            vec![ObjectiveSense::Minimize, ObjectiveSense::Minimize],
            constraint_specs,
        )
    }

    fn evaluate(&self, solution: &mut Solution, _rng: &mut dyn RngCore) {
        let n = self.services.len();

        let mut cost = 0.0;
        let mut touched: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        for k in 0..n {
            let set_count = solution.variables[k].count_ones(..);
            solution.constraints[k] = set_count as f64;

            for x in solution.variables[k].ones() {
                let (u, i) = self.cluster_resource_indices[k][x];
                cost += self.clusters[u].candidates[k][i].cost;
                if seen.insert(u) {
                    touched.push(self.cluster_names[u].clone());
                }
            }
        }

        let mut latency = 0.0;
        for u in &touched {
            for v in &touched {
                latency += self.cluster_graph.latency(u, v).unwrap_or(0.0);
            }
        }

        solution.objectives[0] = cost;
        solution.objectives[1] = latency;
    }
}
