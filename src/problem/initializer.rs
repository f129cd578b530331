use rand::RngCore;

use crate::problem::engine::{MultiObjectiveProblem, PopulationInitializer, Solution};
use crate::problem::local_assignment::LocalAssignmentProblem;

/// Seeds a population whose per-service cardinality starts at (at most)
/// `replicas_k`. Sampling is with replacement: duplicate draws are
/// possible, so the effective cardinality may undershoot `replicas_k` —
/// cardinality repair re-raises it during the first evaluation. Sampling
/// without replacement was considered and rejected: it changes the
/// population's starting distribution in a way that isn't faithful to the
/// reference behavior this initializer reproduces.
pub struct ReplicaAwareInitializer<'a> {
    problem: &'a LocalAssignmentProblem,
}

impl<'a> ReplicaAwareInitializer<'a> {
    pub fn new(problem: &'a LocalAssignmentProblem) -> Self {
        Self { problem }
    }

    fn seed_one(&self, rng: &mut dyn RngCore) -> Solution {
        let mut solution = self.problem.new_solution();
        for (k, feasible) in self.problem.feasible().iter().enumerate() {
            if feasible.is_empty() {
                continue;
            }
            let replicas = self.problem.services()[k].replicas as usize;
            for _ in 0..replicas {
                let draw = (rng.next_u64() as usize) % feasible.len();
                solution.variables[k].set(draw, true);
            }
        }
        solution
    }
}

impl<'a> PopulationInitializer for ReplicaAwareInitializer<'a> {
    fn initialize_population(&self, size: usize, rng: &mut dyn RngCore) -> Vec<Solution> {
        (0..size).map(|_| self.seed_one(rng)).collect()
    }
}
