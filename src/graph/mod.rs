pub mod cluster_graph;
pub mod service_graph;

pub use cluster_graph::{ClusterGraph, LatencyTable};
pub use service_graph::{ServiceEdge, ServiceGraph};
