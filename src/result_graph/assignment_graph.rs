use std::collections::HashMap;
use std::fmt::Write as _;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::problem::{LocalAssignmentProblem, Solution};

/// A vertex of an [`AssignmentGraph`], tagged by which side of the local
/// placement it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentVertex {
    Service { name: String },
    Resource { name: String },
}

/// Edge payload for an assignment: the precomputed placement cost of the
/// (service, resource) pair it connects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignmentEdge {
    pub cost: f64,
}

/// Inspection graph over a selected local solution: one vertex per
/// service, one per resource, an edge for every assigned pair.
#[derive(Debug, Clone)]
pub struct AssignmentGraph {
    graph: DiGraph<AssignmentVertex, AssignmentEdge>,
    service_nodes: HashMap<String, NodeIndex>,
    resource_nodes: HashMap<String, NodeIndex>,
}

impl AssignmentGraph {
    pub fn build(problem: &LocalAssignmentProblem, solution: &Solution) -> Self {
        let mut graph = DiGraph::new();
        let mut service_nodes = HashMap::new();
        let mut resource_nodes = HashMap::new();

        for resource in problem.resources() {
            let index = graph.add_node(AssignmentVertex::Resource {
                name: resource.resource_name.clone(),
            });
            resource_nodes.insert(resource.resource_name.clone(), index);
        }

        for (k, service) in problem.services().iter().enumerate() {
            let service_index = graph.add_node(AssignmentVertex::Service {
                name: service.service_name.clone(),
            });
            service_nodes.insert(service.service_name.clone(), service_index);

            for x in solution.variables[k].ones() {
                let resource_index = problem.feasible()[k][x];
                let resource = &problem.resources()[resource_index];
                let cost = problem.cost_matrix()[k][resource_index];
                let target = resource_nodes[&resource.resource_name];
                graph.add_edge(service_index, target, AssignmentEdge { cost });
            }
        }

        Self {
            graph,
            service_nodes,
            resource_nodes,
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

    pub fn to_graphml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
        out.push_str("  <key id=\"type\" for=\"node\" attr.name=\"type\" attr.type=\"string\"/>\n");
        out.push_str("  <key id=\"cost\" for=\"edge\" attr.name=\"cost\" attr.type=\"double\"/>\n");
        out.push_str("  <graph id=\"assignment\" edgedefault=\"directed\">\n");
        for index in self.graph.node_indices() {
            let (id, kind) = match &self.graph[index] {
                AssignmentVertex::Service { name } => (name.clone(), "service"),
                AssignmentVertex::Resource { name } => (name.clone(), "resource"),
            };
            let _ = writeln!(
                out,
                "    <node id=\"{id}\"><data key=\"type\">{kind}</data></node>"
            );
        }
        for edge in self.graph.edge_references() {
            let source = vertex_id(&self.graph[edge.source()]);
            let target = vertex_id(&self.graph[edge.target()]);
            let _ = writeln!(
                out,
                "    <edge source=\"{source}\" target=\"{target}\"><data key=\"cost\">{}</data></edge>",
                edge.weight().cost
            );
        }
        out.push_str("  </graph>\n");
        out.push_str("</graphml>\n");
        out
    }

    /// Service x resource assignment-count matrix, as CSV. A leading empty
    /// header cell, sorted row/column labels, integer counts.
    pub fn to_csv_matrix(&self) -> String {
        let mut services: Vec<&String> = self.service_nodes.keys().collect();
        services.sort();
        let mut resources: Vec<&String> = self.resource_nodes.keys().collect();
        resources.sort();

        let mut out = String::new();
        out.push(',');
        out.push_str(&resources.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(","));
        out.push('\n');

        for service in &services {
            out.push_str(service);
            let service_index = self.service_nodes[*service];
            for resource in &resources {
                let resource_index = self.resource_nodes[*resource];
                let count = self
                    .graph
                    .edges(service_index)
                    .filter(|edge| edge.target() == resource_index)
                    .count();
                let _ = write!(out, ",{count}");
            }
            out.push('\n');
        }
        out
    }
}

fn vertex_id(vertex: &AssignmentVertex) -> &str {
    match vertex {
        AssignmentVertex::Service { name } => name,
        AssignmentVertex::Resource { name } => name,
    }
}
