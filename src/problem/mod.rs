pub mod engine;
pub mod global_composition;
pub mod initializer;
pub mod local_assignment;
pub mod repair;

pub use engine::{ConstraintSpec, MultiObjectiveProblem, ObjectiveSense, PopulationInitializer, Solution};
pub use global_composition::GlobalCompositionProblem;
pub use initializer::ReplicaAwareInitializer;
pub use local_assignment::LocalAssignmentProblem;
pub use repair::repair_cardinality;
