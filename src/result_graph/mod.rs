pub mod assignment_graph;
pub mod composition_graph;

pub use assignment_graph::{AssignmentEdge, AssignmentGraph, AssignmentVertex};
pub use composition_graph::{CompositionEdge, CompositionGraph, CompositionVertex};
