use crate::problem::Solution;

/// Picks a point along a non-dominated front by preference.
/// `preference == 0.0` favors the lowest objective-0 value, `1.0` the
/// highest; values in between interpolate across the sorted front.
pub struct PreferenceSelector {
    preference: f64,
}

impl PreferenceSelector {
    /// `preference` is clamped to `[0.0, 1.0]`.
    pub fn new(preference: f64) -> Self {
        Self {
            preference: preference.clamp(0.0, 1.0),
        }
    }

    /// Selects from `front`, after dropping infeasible solutions. `None`
    /// when no feasible solution remains.
    pub fn select<'a>(&self, front: &'a [Solution]) -> Option<&'a Solution> {
        let mut feasible: Vec<&Solution> = front.iter().filter(|s| s.is_feasible()).collect();
        if feasible.is_empty() {
            return None;
        }
        feasible.sort_by(|a, b| a.objectives[0].partial_cmp(&b.objectives[0]).unwrap());
        let index = (self.preference * (feasible.len() - 1) as f64).round() as usize;
        Some(feasible[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ConstraintSpec, ObjectiveSense};

    fn solution_with_cost(cost: f64) -> Solution {
        let mut solution = Solution::new(&[], vec![ObjectiveSense::Minimize, ObjectiveSense::Minimize], Vec::new());
        solution.objectives[0] = cost;
        solution
    }

    #[test]
    fn preference_zero_picks_lowest_cost() {
        let front = vec![solution_with_cost(3.0), solution_with_cost(1.0), solution_with_cost(2.0)];
        let selector = PreferenceSelector::new(0.0);
        assert_eq!(selector.select(&front).unwrap().objectives[0], 1.0);
    }

    #[test]
    fn preference_one_picks_highest_cost() {
        let front = vec![solution_with_cost(3.0), solution_with_cost(1.0), solution_with_cost(2.0)];
        let selector = PreferenceSelector::new(1.0);
        assert_eq!(selector.select(&front).unwrap().objectives[0], 3.0);
    }

    #[test]
    fn empty_front_selects_nothing() {
        let selector = PreferenceSelector::new(0.5);
        assert!(selector.select(&[]).is_none());
    }

    #[test]
    fn infeasible_solutions_are_excluded() {
        let mut infeasible = solution_with_cost(0.0);
        infeasible.constraints = vec![1.0];
        infeasible.constraint_specs = vec![ConstraintSpec::EqualTo(0.0)];
        let feasible = solution_with_cost(5.0);
        let front = vec![infeasible, feasible];
        let selector = PreferenceSelector::new(0.0);
        assert_eq!(selector.select(&front).unwrap().objectives[0], 5.0);
    }

    #[test]
    fn single_feasible_solution_wins_regardless_of_preference() {
        let front = vec![solution_with_cost(9.0)];
        assert_eq!(PreferenceSelector::new(0.0).select(&front).unwrap().objectives[0], 9.0);
        assert_eq!(PreferenceSelector::new(1.0).select(&front).unwrap().objectives[0], 9.0);
    }
}
