//! A minimal, non-production search driver: uniform mutation plus greedy
//! non-dominated archive retention. It exists to exercise the full data flow
//! end to end (CLI demo, integration tests); a real deployment drives
//! [`crate::problem::MultiObjectiveProblem`] with a proper evolutionary
//! engine instead.

use rand::RngCore;

use crate::problem::{ConstraintSpec, MultiObjectiveProblem, ObjectiveSense, PopulationInitializer, Solution};

fn better_or_equal(a: f64, b: f64, sense: ObjectiveSense) -> bool {
    match sense {
        ObjectiveSense::Minimize => a <= b,
        ObjectiveSense::Maximize => a >= b,
    }
}

fn strictly_better(a: f64, b: f64, sense: ObjectiveSense) -> bool {
    match sense {
        ObjectiveSense::Minimize => a < b,
        ObjectiveSense::Maximize => a > b,
    }
}

fn total_violation(solution: &Solution) -> f64 {
    solution
        .constraints
        .iter()
        .zip(&solution.constraint_specs)
        .map(|(value, spec)| match spec {
            ConstraintSpec::None => 0.0,
            ConstraintSpec::EqualTo(target) => (value - target).abs(),
        })
        .sum()
}

/// Constrained Pareto domination: feasible beats infeasible; among
/// infeasible solutions, lower total constraint violation wins; among
/// feasible solutions, ordinary Pareto domination respecting each
/// objective's sense.
fn dominates(a: &Solution, b: &Solution) -> bool {
    match (a.is_feasible(), b.is_feasible()) {
        (true, false) => return true,
        (false, true) => return false,
        (false, false) => return total_violation(a) < total_violation(b),
        (true, true) => {}
    }

    let mut any_strict = false;
    for i in 0..a.objectives.len() {
        if !better_or_equal(a.objectives[i], b.objectives[i], a.objective_senses[i]) {
            return false;
        }
        if strictly_better(a.objectives[i], b.objectives[i], a.objective_senses[i]) {
            any_strict = true;
        }
    }
    any_strict
}

fn try_insert(archive: &mut Vec<Solution>, candidate: Solution) {
    if archive.iter().any(|existing| dominates(existing, &candidate)) {
        return;
    }
    archive.retain(|existing| !dominates(&candidate, existing));
    archive.push(candidate);
}

/// Flip each bit of each variable independently with probability `1 /
/// variable length` (clamped to non-empty variables), producing a fresh
/// offspring.
fn mutate(parent: &Solution, rng: &mut dyn RngCore) -> Solution {
    let mut child = parent.clone();
    for variable in &mut child.variables {
        let length = variable.len();
        if length == 0 {
            continue;
        }
        let flip_probability = 1.0 / length as f64;
        for bit in 0..length {
            let roll = rng.next_u32() as f64 / u32::MAX as f64;
            if roll < flip_probability {
                let current = variable[bit];
                variable.set(bit, !current);
            }
        }
    }
    child
}

/// Run `generations` rounds of mutation-only search over `problem`, seeding
/// the initial population from `initializer` when supplied or from all-clear
/// solutions otherwise. Returns the final non-dominated archive.
pub fn run(
    problem: &dyn MultiObjectiveProblem,
    initializer: Option<&dyn PopulationInitializer>,
    population_size: usize,
    generations: usize,
    rng: &mut dyn RngCore,
) -> Vec<Solution> {
    let mut population: Vec<Solution> = match initializer {
        Some(initializer) => initializer.initialize_population(population_size, rng),
        None => (0..population_size).map(|_| problem.new_solution()).collect(),
    };
    for solution in &mut population {
        problem.evaluate(solution, rng);
    }

    let mut archive = Vec::new();
    for solution in population.iter().cloned() {
        try_insert(&mut archive, solution);
    }

    for _ in 0..generations {
        let mut offspring = Vec::with_capacity(population.len());
        for parent in &population {
            let mut child = mutate(parent, rng);
            problem.evaluate(&mut child, rng);
            offspring.push(child);
        }
        for child in offspring.iter().cloned() {
            try_insert(&mut archive, child);
        }
        population = offspring;
    }

    archive
}
