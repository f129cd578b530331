use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use placement_core::characteristics::Characteristics;
use placement_core::domain::{Candidate, Cluster, Resource, Service};
use placement_core::problem::{GlobalCompositionProblem, LocalAssignmentProblem, MultiObjectiveProblem};
use placement_core::state::{GlobalState, LocalState};

fn local_state(resource_count: usize, service_count: usize) -> LocalState {
    let resources = (0..resource_count)
        .map(|i| Resource::new(format!("r{i}"), Characteristics::new(4.0, 4.0, 4.0, 0.0)))
        .collect();
    let services = (0..service_count)
        .map(|i| Service::new(format!("s{i}"), "img", Characteristics::new(1.0, 1.0, 1.0, 0.0), 1.0, 2))
        .collect();
    LocalState::new(resources, services)
}

fn bench_local_assignment(c: &mut Criterion) {
    let state = local_state(20, 50);
    let problem = LocalAssignmentProblem::new(&state, 2.0);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("local_assignment_evaluate", |b| {
        b.iter(|| {
            let mut solution = problem.new_solution();
            for variable in &mut solution.variables {
                if variable.len() > 0 {
                    variable.set(0, true);
                }
            }
            problem.evaluate(&mut solution, &mut rng);
            black_box(solution.objectives)
        })
    });
}

fn global_state(cluster_count: usize, service_count: usize) -> GlobalState {
    let resource = Resource::new("r0", Characteristics::new(4.0, 4.0, 4.0, 0.0));
    let clusters = (0..cluster_count)
        .map(|i| {
            let candidates = vec![vec![Candidate::new(true, 1.0 + i as f64)]; service_count];
            Cluster::new(format!("c{i}"), vec![resource.clone()], candidates).unwrap()
        })
        .collect();
    let services = (0..service_count)
        .map(|i| Service::new(format!("s{i}"), "img", Characteristics::zero(), 0.0, 2))
        .collect();
    GlobalState::new(clusters, services, Default::default()).unwrap()
}

fn bench_global_composition(c: &mut Criterion) {
    let state = global_state(10, 20);
    let problem = GlobalCompositionProblem::new(&state);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("global_composition_evaluate", |b| {
        b.iter(|| {
            let mut solution = problem.new_solution();
            for variable in &mut solution.variables {
                if variable.len() > 0 {
                    variable.set(0, true);
                }
            }
            problem.evaluate(&mut solution, &mut rng);
            black_box(solution.objectives.clone())
        })
    });
}

criterion_group!(benches, bench_local_assignment, bench_global_composition);
criterion_main!(benches);
