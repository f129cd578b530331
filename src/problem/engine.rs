use fixedbitset::FixedBitSet;
use rand::RngCore;

/// Whether an objective is to be minimized or maximized. Attached to a
/// [`Solution`] so any driving evolutionary engine knows how to compare
/// objective values without hard-coding the problem's semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

/// A constraint spec surfaced to the engine alongside a solution's
/// evaluated constraint value. `EqualTo(n)` is an equality
/// constraint whose violation is `|value - n|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintSpec {
    None,
    EqualTo(f64),
}

/// A candidate solution: one bitset per variable, plus the objective and
/// constraint values the engine reads after `evaluate`.
#[derive(Debug, Clone)]
pub struct Solution {
    pub variables: Vec<FixedBitSet>,
    pub objectives: Vec<f64>,
    pub constraints: Vec<f64>,
    pub objective_senses: Vec<ObjectiveSense>,
    pub constraint_specs: Vec<ConstraintSpec>,
}

impl Solution {
    pub fn new(
        variable_lengths: &[usize],
        objective_senses: Vec<ObjectiveSense>,
        constraint_specs: Vec<ConstraintSpec>,
    ) -> Self {
        let objective_count = objective_senses.len();
        let constraint_count = constraint_specs.len();
        Self {
            variables: variable_lengths
                .iter()
                .map(|&len| FixedBitSet::with_capacity(len))
                .collect(),
            objectives: vec![0.0; objective_count],
            constraints: vec![0.0; constraint_count],
            objective_senses,
            constraint_specs,
        }
    }

    /// `true` when every constraint is satisfied exactly.
    pub fn is_feasible(&self) -> bool {
        self.constraints
            .iter()
            .zip(self.constraint_specs.iter())
            .all(|(value, spec)| match spec {
                ConstraintSpec::None => true,
                ConstraintSpec::EqualTo(target) => (*value - *target).abs() < f64::EPSILON,
            })
    }
}

/// The capability set the core requires from an external evolutionary
/// engine, and that any engine implementation must drive a problem through —
/// a capability set rather than a base class.
pub trait MultiObjectiveProblem {
    fn number_of_variables(&self) -> usize;
    fn number_of_objectives(&self) -> usize;
    fn number_of_constraints(&self) -> usize;

    /// A freshly allocated, all-clear solution sized for this problem, with
    /// objective senses and constraint specs attached.
    fn new_solution(&self) -> Solution;

    /// Fill in `solution`'s objective and constraint values. Must not block
    /// or perform I/O; any randomness (e.g. cardinality repair) is
    /// drawn from the caller-supplied `rng` rather than problem-owned
    /// state, so that concurrent evaluation of distinct solutions against
    /// one shared `&self` is safe.
    fn evaluate(&self, solution: &mut Solution, rng: &mut dyn RngCore);
}

/// Optional population seeding supplied by a problem.
pub trait PopulationInitializer {
    fn initialize_population(&self, size: usize, rng: &mut dyn RngCore) -> Vec<Solution>;
}
