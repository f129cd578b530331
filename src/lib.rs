//! Optimization core for a two-level multi-objective evolutionary
//! Cloud-Edge-IoT service placement scheduler: a within-cluster local
//! assignment problem feeding a cross-cluster global composition problem,
//! both exposed as [`problem::MultiObjectiveProblem`] implementations an
//! external evolutionary engine can drive.

pub mod characteristics;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod logging;
pub mod marshal;
pub mod problem;
pub mod result_graph;
pub mod scenario;
pub mod selector;
pub mod state;
pub mod stub_search;
pub mod util;

pub use characteristics::Characteristics;
pub use error::{PlacementError, Result};
