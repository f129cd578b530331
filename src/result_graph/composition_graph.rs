use std::collections::HashMap;
use std::fmt::Write as _;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::characteristics::Characteristics;
use crate::problem::{GlobalCompositionProblem, Solution};

/// A vertex of a [`CompositionGraph`]. Resources are scoped by the cluster
/// that offers them, since the same resource name may recur across
/// clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionVertex {
    Service { name: String },
    ClusterResource { cluster: String, resource: String },
}

/// Edge payload for a cross-cluster assignment: its placement cost and the
/// hosting cluster's self-latency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionEdge {
    pub cost: f64,
    pub latency: f64,
}

/// Inspection graph over a selected global solution: one vertex per
/// service, one per `(cluster, resource)` pair it was assigned to. Exposes
/// `fixedCostPerResource` and `utilizationPerResource` for every touched
/// resource.
#[derive(Debug, Clone)]
pub struct CompositionGraph {
    graph: DiGraph<CompositionVertex, CompositionEdge>,
    service_nodes: HashMap<String, NodeIndex>,
    resource_nodes: HashMap<(String, String), NodeIndex>,
    fixed_cost_per_resource: HashMap<(String, String), f64>,
    utilization_per_resource: HashMap<(String, String), f64>,
}

impl CompositionGraph {
    pub fn build(problem: &GlobalCompositionProblem, solution: &Solution) -> Self {
        let mut graph = DiGraph::new();
        let mut service_nodes: HashMap<String, NodeIndex> = HashMap::new();
        let mut resource_nodes: HashMap<(String, String), NodeIndex> = HashMap::new();
        let mut fixed_cost_per_resource: HashMap<(String, String), f64> = HashMap::new();
        let mut characteristics_per_resource: HashMap<(String, String), Characteristics> = HashMap::new();
        let mut load_per_resource: HashMap<(String, String), Characteristics> = HashMap::new();

        let services = problem.services();
        let clusters = problem.clusters();
        let indices = problem.cluster_resource_indices();
        let cluster_graph = problem.cluster_graph();

        for (k, service) in services.iter().enumerate() {
            let service_index = *service_nodes
                .entry(service.service_name.clone())
                .or_insert_with(|| graph.add_node(CompositionVertex::Service { name: service.service_name.clone() }));

            for x in solution.variables[k].ones() {
                let (u, i) = indices[k][x];
                let cluster = &clusters[u];
                let resource = &cluster.resources[i];
                let key = (cluster.cluster_name.clone(), resource.resource_name.clone());

                let resource_index = *resource_nodes.entry(key.clone()).or_insert_with(|| {
                    graph.add_node(CompositionVertex::ClusterResource {
                        cluster: cluster.cluster_name.clone(),
                        resource: resource.resource_name.clone(),
                    })
                });
                fixed_cost_per_resource.entry(key.clone()).or_insert(resource.cost.fixed);
                characteristics_per_resource
                    .entry(key.clone())
                    .or_insert_with(|| resource.characteristics.clone());

                let cost = cluster.candidates[k][i].cost;
                let latency = cluster_graph.latency(&cluster.cluster_name, &cluster.cluster_name).unwrap_or(0.0);
                graph.add_edge(service_index, resource_index, CompositionEdge { cost, latency });

                let load = load_per_resource.entry(key).or_insert_with(Characteristics::zero);
                *load = load.add(&service.requirements);
            }
        }

        let utilization_per_resource = load_per_resource
            .iter()
            .map(|(key, load)| {
                let characteristics = &characteristics_per_resource[key];
                (key.clone(), load.div_guarded(characteristics).max())
            })
            .collect();

        Self {
            graph,
            service_nodes,
            resource_nodes,
            fixed_cost_per_resource,
            utilization_per_resource,
        }
    }

    pub fn service_count(&self) -> usize {
        self.service_nodes.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resource_nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn fixed_cost_per_resource(&self) -> &HashMap<(String, String), f64> {
        &self.fixed_cost_per_resource
    }

    pub fn utilization_per_resource(&self) -> &HashMap<(String, String), f64> {
        &self.utilization_per_resource
    }

    pub fn to_graphml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
        out.push_str("  <key id=\"type\" for=\"node\" attr.name=\"type\" attr.type=\"string\"/>\n");
        out.push_str("  <key id=\"cost\" for=\"edge\" attr.name=\"cost\" attr.type=\"double\"/>\n");
        out.push_str("  <key id=\"latency\" for=\"edge\" attr.name=\"latency\" attr.type=\"double\"/>\n");
        out.push_str("  <graph id=\"composition\" edgedefault=\"directed\">\n");
        for index in self.graph.node_indices() {
            let (id, kind) = match &self.graph[index] {
                CompositionVertex::Service { name } => (name.clone(), "service"),
                CompositionVertex::ClusterResource { cluster, resource } => {
                    (format!("{cluster}::{resource}"), "clusterResource")
                }
            };
            let _ = writeln!(out, "    <node id=\"{id}\"><data key=\"type\">{kind}</data></node>");
        }
        for edge in self.graph.edge_references() {
            let source = vertex_id(&self.graph[edge.source()]);
            let target = vertex_id(&self.graph[edge.target()]);
            let payload = edge.weight();
            let _ = writeln!(
                out,
                "    <edge source=\"{source}\" target=\"{target}\"><data key=\"cost\">{}</data><data key=\"latency\">{}</data></edge>",
                payload.cost, payload.latency
            );
        }
        out.push_str("  </graph>\n");
        out.push_str("</graphml>\n");
        out
    }
}

fn vertex_id(vertex: &CompositionVertex) -> String {
    match vertex {
        CompositionVertex::Service { name } => name.clone(),
        CompositionVertex::ClusterResource { cluster, resource } => format!("{cluster}::{resource}"),
    }
}
