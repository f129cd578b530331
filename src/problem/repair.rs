use std::cmp::Ordering;

use fixedbitset::FixedBitSet;
use rand::seq::SliceRandom;
use rand::RngCore;

/// Repair `bits` in place so its cardinality equals `target` (clamped to the
/// bitset's length), clearing or setting uniformly-at-random-chosen bits as
/// needed. A no-op if the cardinality already matches. Mutates the
/// solution in place; after repair the bitset is feasible by construction,
/// so local evaluation emits no constraint violation.
pub fn repair_cardinality(bits: &mut FixedBitSet, target: usize, rng: &mut dyn RngCore) {
    let length = bits.len();
    let target = target.min(length);
    let current = bits.count_ones(..);

    match current.cmp(&target) {
        Ordering::Equal => {}
        Ordering::Greater => {
            let mut set_bits: Vec<usize> = bits.ones().collect();
            let to_clear = current - target;
            let (chosen, _) = set_bits.partial_shuffle(rng, to_clear);
            for &index in chosen.iter() {
                bits.set(index, false);
            }
        }
        Ordering::Less => {
            let mut clear_bits: Vec<usize> = (0..length).filter(|&i| !bits[i]).collect();
            let to_set = target - current;
            let (chosen, _) = clear_bits.partial_shuffle(rng, to_set);
            for &index in chosen.iter() {
                bits.set(index, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn no_op_when_already_at_target() {
        let mut bits = FixedBitSet::with_capacity(5);
        bits.set(0, true);
        bits.set(1, true);
        let mut rng = StdRng::seed_from_u64(1);
        repair_cardinality(&mut bits, 2, &mut rng);
        assert_eq!(bits.count_ones(..), 2);
        assert!(bits[0] && bits[1]);
    }

    #[test]
    fn clears_down_to_target() {
        let mut bits = FixedBitSet::with_capacity(10);
        for i in 0..7 {
            bits.set(i, true);
        }
        let mut rng = StdRng::seed_from_u64(2);
        repair_cardinality(&mut bits, 3, &mut rng);
        assert_eq!(bits.count_ones(..), 3);
    }

    #[test]
    fn sets_up_to_target() {
        let mut bits = FixedBitSet::with_capacity(10);
        bits.set(0, true);
        let mut rng = StdRng::seed_from_u64(3);
        repair_cardinality(&mut bits, 6, &mut rng);
        assert_eq!(bits.count_ones(..), 6);
    }

    #[test]
    fn target_clamped_to_length() {
        let mut bits = FixedBitSet::with_capacity(3);
        let mut rng = StdRng::seed_from_u64(4);
        repair_cardinality(&mut bits, 100, &mut rng);
        assert_eq!(bits.count_ones(..), 3);
    }

    #[test]
    fn cleared_bits_are_approximately_uniform() {
        let mut counts = [0u32; 10];
        for seed in 0..2000u64 {
            let mut bits = FixedBitSet::with_capacity(10);
            for i in 0..10 {
                bits.set(i, true);
            }
            let mut rng = StdRng::seed_from_u64(seed);
            repair_cardinality(&mut bits, 9, &mut rng);
            for i in 0..10 {
                if !bits[i] {
                    counts[i] += 1;
                }
            }
        }
        let expected = 2000.0 / 10.0;
        for count in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.35, "deviation too large: {count} vs {expected}");
        }
    }
}
