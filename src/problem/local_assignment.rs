use rand::RngCore;

use crate::characteristics::Characteristics;
use crate::domain::{Candidate, Resource, Service};
use crate::problem::engine::{ConstraintSpec, MultiObjectiveProblem, ObjectiveSense, Solution};
use crate::problem::repair::repair_cardinality;
use crate::state::LocalState;

/// Objective evaluator for the within-cluster placement problem.
/// Construction precomputes feasibility and per-(service, resource) cost;
/// `evaluate` allocates its scratch buffers on the stack so the same
/// problem instance can be evaluated concurrently against distinct
/// solutions.
pub struct LocalAssignmentProblem {
    services: Vec<Service>,
    resources: Vec<Resource>,
    /// `feasible[k]`: resource indices (ascending) whose characteristics
    /// dominate service `k`'s requirements.
    feasible: Vec<Vec<usize>>,
    /// `cost[k][i]`: precomputed assignment cost for every `(service,
    /// resource)` pair, including infeasible ones — the marshaller needs a
    /// cost for every resource, not just feasible ones.
    cost: Vec<Vec<f64>>,
    /// Fairness exponent `p >= 1`.
    p: f64,
}

impl LocalAssignmentProblem {
    pub fn new(state: &LocalState, p: f64) -> Self {
        debug_assert!(p >= 1.0);
        let services: Vec<Service> = state.services_in_order().into_iter().cloned().collect();
        let resources: Vec<Resource> = state.resources_in_order().into_iter().cloned().collect();
        let graph = state.service_graph();

        let feasible: Vec<Vec<usize>> = services
            .iter()
            .map(|service| {
                resources
                    .iter()
                    .enumerate()
                    .filter(|(_, resource)| service.requirements.leq(&resource.characteristics))
                    .map(|(index, _)| index)
                    .collect()
            })
            .collect();

        let cost: Vec<Vec<f64>> = services
            .iter()
            .map(|service| {
                let out_sum: f64 = graph
                    .outgoing(&service.service_name)
                    .iter()
                    .map(|(_, edge)| edge.data_transfer)
                    .sum();
                let in_sum: f64 = graph
                    .incoming(&service.service_name)
                    .iter()
                    .map(|(_, edge)| edge.data_transfer)
                    .sum();
                resources
                    .iter()
                    .map(|resource| {
                        resource.cost.fixed
                            + service.data * resource.cost.data
                            + out_sum * resource.cost.out
                            + in_sum * resource.cost.inbound
                    })
                    .collect()
            })
            .collect();

        Self {
            services,
            resources,
            feasible,
            cost,
            p,
        }
    }

    pub fn feasible(&self) -> &[Vec<usize>] {
        &self.feasible
    }

    pub fn cost_matrix(&self) -> &[Vec<f64>] {
        &self.cost
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Target cardinality for service `k`: `min(replicas_k, |feasible[k]|)`.
    fn target_cardinality(&self, k: usize) -> usize {
        (self.services[k].replicas as usize).min(self.feasible[k].len())
    }

    /// Decode a repaired solution into `assignments[k][i]` candidate
    /// records for every service `k` and resource `i`.
    pub fn marshal_candidates(&self, solution: &Solution) -> Vec<Vec<Candidate>> {
        (0..self.services.len())
            .map(|k| {
                let assigned_resources: std::collections::HashSet<usize> = solution.variables[k]
                    .ones()
                    .map(|x| self.feasible[k][x])
                    .collect();
                (0..self.resources.len())
                    .map(|i| Candidate::new(assigned_resources.contains(&i), self.cost[k][i]))
                    .collect()
            })
            .collect()
    }
}

impl MultiObjectiveProblem for LocalAssignmentProblem {
    fn number_of_variables(&self) -> usize {
        self.services.len()
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn number_of_constraints(&self) -> usize {
        0
    }

    fn new_solution(&self) -> Solution {
        let lengths: Vec<usize> = self.feasible.iter().map(Vec::len).collect();
        Solution::new(
            &lengths,
            vec![ObjectiveSense::Minimize, ObjectiveSense::Maximize],
            Vec::new(),
        )
    }

    fn evaluate(&self, solution: &mut Solution, rng: &mut dyn RngCore) {
        let n = self.services.len();
        let m = self.resources.len();

        for k in 0..n {
            let target = self.target_cardinality(k);
            repair_cardinality(&mut solution.variables[k], target, rng);
        }

        let mut assignments = vec![vec![false; m]; n];
        for k in 0..n {
            for x in solution.variables[k].ones() {
                assignments[k][self.feasible[k][x]] = true;
            }
        }

        let mut cost = 0.0;
        for k in 0..n {
            for i in 0..m {
                if assignments[k][i] {
                    cost += self.cost[k][i];
                }
            }
        }

        let mut util = vec![0.0f64; m];
        for i in 0..m {
            let mut load = Characteristics::zero();
            let mut any = false;
            for k in 0..n {
                if assignments[k][i] {
                    load = load.add(&self.services[k].requirements);
                    any = true;
                }
            }
            util[i] = if any {
                load.div_guarded(&self.resources[i].characteristics).max()
            } else {
                0.0
            };
        }

        let fairness = util.iter().map(|u| u.powf(self.p)).sum::<f64>().powf(1.0 / self.p);

        solution.objectives[0] = cost;
        solution.objectives[1] = fairness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn local_state_scenario_s1() -> LocalState {
        let r0 = Resource::new("r0", Characteristics::new(1.0, 1.0, 1.0, 0.0));
        let r1 = Resource::new("r1", Characteristics::new(2.0, 2.0, 2.0, 0.0));
        let s0 = Service::new("s0", "img", Characteristics::new(1.0, 1.0, 1.0, 0.0), 0.0, 1);
        let s1 = Service::new("s1", "img", Characteristics::new(2.0, 2.0, 2.0, 0.0), 0.0, 1);
        LocalState::new(vec![r0, r1], vec![s0, s1])
    }

    #[test]
    fn scenario_s1_feasibility() {
        let state = local_state_scenario_s1();
        let problem = LocalAssignmentProblem::new(&state, 2.0);
        assert_eq!(problem.feasible()[0], vec![0, 1]);
        assert_eq!(problem.feasible()[1], vec![1]);
    }

    #[test]
    fn scenario_s2_cost_correctness() {
        let resource = Resource::new("r0", Characteristics::new(1.0, 0.0, 0.0, 0.0));
        let service = Service::new("s0", "img", Characteristics::new(1.0, 0.0, 0.0, 0.0), 10.0, 1);
        let state = LocalState::new(vec![resource], vec![service]);
        let problem = LocalAssignmentProblem::new(&state, 2.0);
        assert!((problem.cost_matrix()[0][0] - 0.0366).abs() < 1e-9);

        let mut solution = problem.new_solution();
        let mut rng = StdRng::seed_from_u64(42);
        problem.evaluate(&mut solution, &mut rng);
        assert!((solution.objectives[0] - 0.0366).abs() < 1e-9);
    }

    #[test]
    fn invariant_cardinality_matches_target_after_repair() {
        let state = local_state_scenario_s1();
        let problem = LocalAssignmentProblem::new(&state, 2.0);
        let mut solution = problem.new_solution();
        solution.variables[0].set(0, true);
        solution.variables[0].set(1, true);
        let mut rng = StdRng::seed_from_u64(7);
        problem.evaluate(&mut solution, &mut rng);
        assert_eq!(solution.variables[0].count_ones(..), 1);
        assert_eq!(solution.variables[1].count_ones(..), 1);
    }

    #[test]
    fn invariant_feasibility_after_evaluation() {
        let state = local_state_scenario_s1();
        let problem = LocalAssignmentProblem::new(&state, 2.0);
        let mut solution = problem.new_solution();
        let mut rng = StdRng::seed_from_u64(11);
        problem.evaluate(&mut solution, &mut rng);
        for (k, service) in problem.services().iter().enumerate() {
            for x in solution.variables[k].ones() {
                let resource = &problem.resources()[problem.feasible()[k][x]];
                assert!(service.requirements.leq(&resource.characteristics));
            }
        }
    }

    #[test]
    fn empty_feasibility_contributes_nothing() {
        let resource = Resource::new("r0", Characteristics::new(1.0, 0.0, 0.0, 0.0));
        let service = Service::new("s0", "img", Characteristics::new(5.0, 0.0, 0.0, 0.0), 0.0, 1);
        let state = LocalState::new(vec![resource], vec![service]);
        let problem = LocalAssignmentProblem::new(&state, 2.0);
        assert!(problem.feasible()[0].is_empty());
        let mut solution = problem.new_solution();
        assert_eq!(solution.variables[0].len(), 0);
        let mut rng = StdRng::seed_from_u64(1);
        problem.evaluate(&mut solution, &mut rng);
        assert_eq!(solution.objectives[0], 0.0);
    }

    #[test]
    fn fairness_prefers_even_split_scenario_s3() {
        let r0 = Resource::new("r0", Characteristics::new(2.0, 2.0, 2.0, 0.0));
        let r1 = Resource::new("r1", Characteristics::new(2.0, 2.0, 2.0, 0.0));
        let services: Vec<Service> = (0..4)
            .map(|i| {
                Service::new(
                    format!("s{i}"),
                    "img",
                    Characteristics::new(1.0, 1.0, 1.0, 0.0),
                    0.0,
                    1,
                )
            })
            .collect();
        let state = LocalState::new(vec![r0, r1], services);
        let problem = LocalAssignmentProblem::new(&state, 2.0);

        let mut split = problem.new_solution();
        for k in 0..2 {
            split.variables[k].set(0, true);
        }
        for k in 2..4 {
            split.variables[k].set(1, true);
        }
        let mut rng = StdRng::seed_from_u64(1);
        problem.evaluate(&mut split, &mut rng);

        let mut lopsided = problem.new_solution();
        for k in 0..4 {
            lopsided.variables[k].set(0, true);
        }
        problem.evaluate(&mut lopsided, &mut rng);

        assert!(split.objectives[1] < lopsided.objectives[1]);
    }

    #[test]
    fn parallel_evaluation_matches_sequential() {
        let state = local_state_scenario_s1();
        let problem = LocalAssignmentProblem::new(&state, 2.0);

        let mut sequential_results = Vec::new();
        for seed in 0..8u64 {
            let mut solution = problem.new_solution();
            let mut rng = StdRng::seed_from_u64(seed);
            problem.evaluate(&mut solution, &mut rng);
            sequential_results.push(solution.objectives);
        }

        let parallel_results: Vec<Vec<f64>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8u64)
                .map(|seed| {
                    let problem = &problem;
                    scope.spawn(move || {
                        let mut solution = problem.new_solution();
                        let mut rng = StdRng::seed_from_u64(seed);
                        problem.evaluate(&mut solution, &mut rng);
                        solution.objectives
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential_results, parallel_results);
    }
}
