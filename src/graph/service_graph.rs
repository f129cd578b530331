use std::collections::HashMap;
use std::fmt::Write as _;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::domain::Service;

/// Payload carried by a service graph edge: the interaction's cost-relevant
/// data transfer quantity, alongside the weight also stored by petgraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceEdge {
    pub weight: f64,
    pub data_transfer: f64,
}

/// Directed weighted multigraph of inter-service interactions within one
/// locality. Built once per [`crate::state::LocalState`] and read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct ServiceGraph {
    graph: DiGraph<String, ServiceEdge>,
    index_of: HashMap<String, NodeIndex>,
}

impl ServiceGraph {
    /// Build from a collection of services. For each service, iterate its
    /// interaction map; targets not present in `services` are ignored
    /// without error.
    pub fn build<'a>(services: impl IntoIterator<Item = &'a Service>) -> Self {
        let services: Vec<&Service> = services.into_iter().collect();
        let mut graph = DiGraph::new();
        let mut index_of = HashMap::with_capacity(services.len());

        for service in &services {
            let index = graph.add_node(service.service_name.clone());
            index_of.insert(service.service_name.clone(), index);
        }

        for service in &services {
            let from = index_of[&service.service_name];
            for (target, interaction) in &service.interactions {
                if let Some(&to) = index_of.get(target) {
                    graph.add_edge(
                        from,
                        to,
                        ServiceEdge {
                            weight: interaction.weight,
                            data_transfer: interaction.data_transfer,
                        },
                    );
                }
            }
        }

        Self { graph, index_of }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The payload of the first edge `from -> to`, if one exists.
    pub fn data_transfer(&self, from: &str, to: &str) -> Option<f64> {
        let from_index = *self.index_of.get(from)?;
        let to_index = *self.index_of.get(to)?;
        self.graph
            .edges(from_index)
            .find(|edge| edge.target() == to_index)
            .map(|edge| edge.weight().data_transfer)
    }

    /// Edges carried out of `service_name`, keyed by target name.
    pub fn outgoing(&self, service_name: &str) -> Vec<(String, ServiceEdge)> {
        let Some(&index) = self.index_of.get(service_name) else {
            return Vec::new();
        };
        self.graph
            .edges(index)
            .map(|edge| {
                let target = self.graph[edge.target()].clone();
                (target, *edge.weight())
            })
            .collect()
    }

    /// Edges carried into `service_name`, keyed by source name.
    pub fn incoming(&self, service_name: &str) -> Vec<(String, ServiceEdge)> {
        let Some(&index) = self.index_of.get(service_name) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(index, petgraph::Direction::Incoming)
            .map(|edge| {
                let source = self.graph[edge.source()].clone();
                (source, *edge.weight())
            })
            .collect()
    }

    /// GraphML export (service and edge attributes only; no I/O here).
    pub fn to_graphml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
        out.push_str("  <key id=\"weight\" for=\"edge\" attr.name=\"weight\" attr.type=\"double\"/>\n");
        out.push_str(
            "  <key id=\"dataTransfer\" for=\"edge\" attr.name=\"dataTransfer\" attr.type=\"double\"/>\n",
        );
        out.push_str("  <graph id=\"services\" edgedefault=\"directed\">\n");
        for index in self.graph.node_indices() {
            let _ = writeln!(out, "    <node id=\"{}\"/>", self.graph[index]);
        }
        for edge_index in self.graph.edge_indices() {
            write_edge(&mut out, &self.graph, edge_index);
        }
        out.push_str("  </graph>\n");
        out.push_str("</graphml>\n");
        out
    }
}

fn write_edge(out: &mut String, graph: &DiGraph<String, ServiceEdge>, edge_index: EdgeIndex) {
    let (source, target) = graph.edge_endpoints(edge_index).expect("valid edge index");
    let payload = &graph[edge_index];
    let _ = writeln!(
        out,
        "    <edge source=\"{}\" target=\"{}\"><data key=\"weight\">{}</data><data key=\"dataTransfer\">{}</data></edge>",
        graph[source], graph[target], payload.weight, payload.data_transfer
    );
}
