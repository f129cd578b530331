use crate::problem::Solution;
use crate::util::kneeness;

/// Picks the "knee" of a non-dominated front: the interior point furthest
/// from the line joining its extremes in 2-objective space.
pub struct KneenessSelector;

impl KneenessSelector {
    pub fn new() -> Self {
        Self
    }

    /// Selects from `front`, after dropping infeasible solutions. Fronts
    /// with fewer than three feasible points have no interior point, so the
    /// lowest-objective-0 extreme is returned instead. `None` when no
    /// feasible solution remains.
    pub fn select<'a>(&self, front: &'a [Solution]) -> Option<&'a Solution> {
        let mut feasible: Vec<&Solution> = front.iter().filter(|s| s.is_feasible()).collect();
        if feasible.is_empty() {
            return None;
        }
        feasible.sort_by(|a, b| a.objectives[0].partial_cmp(&b.objectives[0]).unwrap());
        if feasible.len() < 3 {
            return Some(feasible[0]);
        }

        let p0 = (feasible[0].objectives[0], feasible[0].objectives[1]);
        let p1 = (
            feasible[feasible.len() - 1].objectives[0],
            feasible[feasible.len() - 1].objectives[1],
        );

        let mut best_index = 1;
        let mut best_distance = f64::MIN;
        for (index, solution) in feasible.iter().enumerate().take(feasible.len() - 1).skip(1) {
            let p = (solution.objectives[0], solution.objectives[1]);
            let distance = kneeness::compute(p0, p1, p);
            if distance > best_distance {
                best_distance = distance;
                best_index = index;
            }
        }
        Some(feasible[best_index])
    }
}

impl Default for KneenessSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ObjectiveSense;

    fn solution_at(cost: f64, fairness: f64) -> Solution {
        let mut solution = Solution::new(&[], vec![ObjectiveSense::Minimize, ObjectiveSense::Minimize], Vec::new());
        solution.objectives[0] = cost;
        solution.objectives[1] = fairness;
        solution
    }

    #[test]
    fn picks_the_point_furthest_from_the_extremes_line() {
        let front = vec![
            solution_at(0.0, 4.0),
            solution_at(1.0, 3.0),
            solution_at(2.0, 2.9),
            solution_at(3.0, 1.0),
            solution_at(4.0, 0.0),
        ];
        let selected = KneenessSelector::new().select(&front).unwrap();
        assert_eq!(selected.objectives[0], 2.0);
    }

    #[test]
    fn fewer_than_three_points_returns_lowest_extreme() {
        let front = vec![solution_at(5.0, 0.0), solution_at(1.0, 9.0)];
        let selected = KneenessSelector::new().select(&front).unwrap();
        assert_eq!(selected.objectives[0], 1.0);
    }

    #[test]
    fn empty_front_selects_nothing() {
        assert!(KneenessSelector::new().select(&[]).is_none());
    }
}
