pub mod candidate;
pub mod cluster;
pub mod interaction;
pub mod resource;
pub mod service;

pub use candidate::Candidate;
pub use cluster::Cluster;
pub use interaction::Interaction;
pub use resource::{Resource, ResourceCost};
pub use service::Service;
