use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Row -> col -> latency value. Row and column keys are cluster names; a
/// missing inner entry is a null cell and contributes no edge.
pub type LatencyTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Directed weighted pseudograph on clusters, edges carrying latency. Self
/// loops (`from == to`) are permitted when present in the table — the
/// global composition evaluator relies on this for the intra-cluster
/// latency term.
#[derive(Debug, Clone)]
pub struct ClusterGraph {
    graph: DiGraph<String, f64>,
    index_of: HashMap<String, NodeIndex>,
}

impl ClusterGraph {
    /// Build from the known cluster names and a latency table. Cells whose
    /// row or column does not name a known cluster are skipped.
    pub fn build<'a>(cluster_names: impl IntoIterator<Item = &'a str>, latency: &LatencyTable) -> Self {
        let mut graph = DiGraph::new();
        let mut index_of = HashMap::new();

        for name in cluster_names {
            let index = graph.add_node(name.to_string());
            index_of.insert(name.to_string(), index);
        }

        for (from, per_target) in latency {
            let Some(&from_index) = index_of.get(from) else {
                continue;
            };
            for (to, value) in per_target {
                let Some(&to_index) = index_of.get(to) else {
                    continue;
                };
                graph.add_edge(from_index, to_index, *value);
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

    /// The stored latency value for `from -> to`, if an edge exists.
    pub fn latency(&self, from: &str, to: &str) -> Option<f64> {
        let from_index = *self.index_of.get(from)?;
        let to_index = *self.index_of.get(to)?;
        self.graph
            .edges(from_index)
            .find(|edge| edge.target() == to_index)
            .map(|edge| *edge.weight())
    }

    pub fn to_graphml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
        out.push_str("  <key id=\"latency\" for=\"edge\" attr.name=\"latency\" attr.type=\"double\"/>\n");
        out.push_str("  <graph id=\"clusters\" edgedefault=\"directed\">\n");
        for index in self.graph.node_indices() {
            let _ = writeln!(out, "    <node id=\"{}\"/>", self.graph[index]);
        }
        for edge_index in self.graph.edge_indices() {
            let (source, target) = self.graph.edge_endpoints(edge_index).expect("valid edge index");
            let latency = self.graph[edge_index];
            let _ = writeln!(
                out,
                "    <edge source=\"{}\" target=\"{}\"><data key=\"latency\">{}</data></edge>",
                self.graph[source], self.graph[target], latency
            );
        }
        out.push_str("  </graph>\n");
        out.push_str("</graphml>\n");
        out
    }
}
