use serde::{Deserialize, Serialize};

/// Additive guard used when dividing by a characteristics component that may
/// be zero (e.g. a resource with no GPU). Participates in downstream sums —
/// do not replace with a zero-check short-circuit.
const DIVISION_GUARD: f64 = 1e-10;

/// Fuzzy-equality tolerance for [`Characteristics::approx_eq`].
const EPSILON: f64 = 1e-5;

/// Fixed 4-vector of non-negative resource quantities: cpu, memory, disk,
/// gpu. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    pub values: [f64; 4],
}

impl Characteristics {
    pub const CPU: usize = 0;
    pub const MEMORY: usize = 1;
    pub const DISK: usize = 2;
    pub const GPU: usize = 3;

    pub fn new(cpu: f64, memory: f64, disk: f64, gpu: f64) -> Self {
        Self {
            values: [cpu, memory, disk, gpu],
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn cpu(&self) -> f64 {
        self.values[Self::CPU]
    }

    pub fn memory(&self) -> f64 {
        self.values[Self::MEMORY]
    }

    pub fn disk(&self) -> f64 {
        self.values[Self::DISK]
    }

    pub fn gpu(&self) -> f64 {
        self.values[Self::GPU]
    }

    /// Component-wise `<=`, used for feasibility: `self` fits within `other`.
    pub fn leq(&self, other: &Characteristics) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a <= b)
    }

    /// Component-wise addition.
    pub fn add(&self, other: &Characteristics) -> Characteristics {
        let mut values = [0.0; 4];
        for i in 0..4 {
            values[i] = self.values[i] + other.values[i];
        }
        Characteristics { values }
    }

    /// Component-wise division with the additive guard against a zero
    /// divisor; never substitute a zero-check for the guard, the guarded
    /// value feeds downstream sums.
    pub fn div_guarded(&self, other: &Characteristics) -> Characteristics {
        let mut values = [0.0; 4];
        for i in 0..4 {
            values[i] = self.values[i] / (other.values[i] + DIVISION_GUARD);
        }
        Characteristics { values }
    }

    /// Largest component. Call sites need the dominant (worst-case)
    /// dimension of a utilization vector, so this returns the maximum
    /// despite the name inviting a "minimum" misreading.
    pub fn max(&self) -> f64 {
        self.values.iter().cloned().fold(f64::MIN, f64::max)
    }

    /// Sum of all components.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Fuzzy equality within [`EPSILON`].
    pub fn approx_eq(&self, other: &Characteristics) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }
}

impl Default for Characteristics {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn characteristics_strategy() -> impl Strategy<Value = Characteristics> {
        (0.0..1000.0f64, 0.0..1000.0f64, 0.0..1000.0f64, 0.0..1000.0f64)
            .prop_map(|(c, m, d, g)| Characteristics::new(c, m, d, g))
    }

    #[test]
    fn leq_is_reflexive() {
        let c = Characteristics::new(1.0, 2.0, 3.0, 4.0);
        assert!(c.leq(&c));
    }

    #[test]
    fn leq_is_transitive_example() {
        let a = Characteristics::new(1.0, 1.0, 1.0, 0.0);
        let b = Characteristics::new(2.0, 2.0, 2.0, 0.0);
        let c = Characteristics::new(3.0, 3.0, 3.0, 0.0);
        assert!(a.leq(&b) && b.leq(&c) && a.leq(&c));
    }

    #[test]
    fn guarded_division_handles_zero_gpu() {
        let util = Characteristics::new(1.0, 1.0, 1.0, 0.0);
        let capacity = Characteristics::new(2.0, 2.0, 2.0, 0.0);
        let ratio = util.div_guarded(&capacity);
        assert!(ratio.gpu().is_finite());
        assert_eq!(ratio.gpu(), 0.0);
    }

    #[test]
    fn max_returns_dominant_component() {
        let c = Characteristics::new(0.1, 0.9, 0.2, 0.0);
        assert!((c.max() - 0.9).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn add_is_commutative(a in characteristics_strategy(), b in characteristics_strategy()) {
            prop_assert!(a.add(&b).approx_eq(&b.add(&a)));
        }

        #[test]
        fn add_is_associative(a in characteristics_strategy(), b in characteristics_strategy(), c in characteristics_strategy()) {
            let left = a.add(&b).add(&c);
            let right = a.add(&b.add(&c));
            prop_assert!((left.sum() - right.sum()).abs() < 1e-6);
        }

        #[test]
        fn leq_reflexive_prop(a in characteristics_strategy()) {
            prop_assert!(a.leq(&a));
        }
    }
}
