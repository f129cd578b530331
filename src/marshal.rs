use crate::domain::Cluster;
use crate::error::StructuralError;
use crate::problem::{LocalAssignmentProblem, Solution};

/// Convert a local solution into the per-(service, resource) candidate list
/// consumed by the global stage.
pub fn marshal_candidates(
    problem: &LocalAssignmentProblem,
    solution: &Solution,
) -> Vec<Vec<crate::domain::Candidate>> {
    problem.marshal_candidates(solution)
}

/// Package a local solution as a [`Cluster`] ready to join a
/// [`crate::state::GlobalState`].
pub fn marshal_cluster(
    cluster_name: impl Into<String>,
    problem: &LocalAssignmentProblem,
    solution: &Solution,
) -> Result<Cluster, StructuralError> {
    let candidates = marshal_candidates(problem, solution);
    Cluster::new(cluster_name, problem.resources().to_vec(), candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::Characteristics;
    use crate::domain::{Resource, Service};
    use crate::problem::MultiObjectiveProblem;
    use crate::state::LocalState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn marshalled_cluster_matches_resource_count() {
        let r0 = Resource::new("r0", Characteristics::new(1.0, 1.0, 1.0, 0.0));
        let r1 = Resource::new("r1", Characteristics::new(2.0, 2.0, 2.0, 0.0));
        let s0 = Service::new("s0", "img", Characteristics::new(1.0, 1.0, 1.0, 0.0), 0.0, 1);
        let state = LocalState::new(vec![r0, r1], vec![s0]);
        let problem = LocalAssignmentProblem::new(&state, 2.0);

        let mut solution = problem.new_solution();
        let mut rng = StdRng::seed_from_u64(1);
        problem.evaluate(&mut solution, &mut rng);

        let cluster = marshal_cluster("edge-1", &problem, &solution).unwrap();
        assert_eq!(cluster.resource_count(), 2);
        assert_eq!(cluster.service_count(), 1);
        assert_eq!(cluster.candidates[0].len(), 2);
    }
}
