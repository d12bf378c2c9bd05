//! Dice rolling - sorted rolls drawn from any entropy source

mod hero;

pub use hero::{die_size, roll_with_hero};

use crate::types::STANDARD_DIE;

/// Anything that can draw an integer uniformly from an inclusive range
///
/// Every `rand` generator implements this, so seeded generators, the thread
/// RNG and scripted test sources are interchangeable.
pub trait DiceSource {
    /// Draw a value uniformly from `[low, high]`
    fn randint(&mut self, low: u32, high: u32) -> u32;
}

impl<R: rand::RngCore + ?Sized> DiceSource for R {
    fn randint(&mut self, low: u32, high: u32) -> u32 {
        use rand::Rng;
        self.gen_range(low..=high)
    }
}

/// Sort a set of rolls highest first
pub fn sort_descending(rolls: &mut [u32]) {
    rolls.sort_unstable_by(|a, b| b.cmp(a));
}

/// Roll `count` dice with `faces` sides, sorted descending
pub fn roll<S: DiceSource + ?Sized>(count: u32, faces: u32, rng: &mut S) -> Vec<u32> {
    let mut rolls: Vec<u32> = (0..count).map(|_| rng.randint(1, faces)).collect();
    sort_descending(&mut rolls);
    rolls
}

/// Roll `count` standard d6
pub fn roll_d6<S: DiceSource + ?Sized>(count: u32, rng: &mut S) -> Vec<u32> {
    roll(count, STANDARD_DIE, rng)
}

/// Replace the lowest die with a fresh roll and re-sort
///
/// Empty input is returned unchanged without consuming entropy.
pub fn reroll_lowest<S: DiceSource + ?Sized>(rolls: &[u32], faces: u32, rng: &mut S) -> Vec<u32> {
    let mut result = rolls.to_vec();
    if let Some(lowest) = result.last_mut() {
        *lowest = rng.randint(1, faces);
        sort_descending(&mut result);
    }
    result
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DiceSource;
    use std::collections::VecDeque;

    /// Always returns the same face, clamped into the requested range
    pub struct ConstantDice(pub u32);

    impl DiceSource for ConstantDice {
        fn randint(&mut self, low: u32, high: u32) -> u32 {
            self.0.clamp(low, high)
        }
    }

    /// Plays back a fixed sequence of draws
    pub struct ScriptedDice {
        draws: VecDeque<u32>,
    }

    impl ScriptedDice {
        pub fn new(draws: &[u32]) -> Self {
            ScriptedDice {
                draws: draws.iter().copied().collect(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.draws.len()
        }
    }

    impl DiceSource for ScriptedDice {
        fn randint(&mut self, low: u32, high: u32) -> u32 {
            let value = self.draws.pop_front().expect("scripted dice exhausted");
            assert!(
                (low..=high).contains(&value),
                "scripted value {value} outside [{low}, {high}]"
            );
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedDice;
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_zero_dice_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(roll(0, 6, &mut rng).is_empty());
    }

    #[test]
    fn test_roll_sorted_descending_and_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let rolls = roll(5, 6, &mut rng);
            assert_eq!(rolls.len(), 5);
            assert!(rolls.windows(2).all(|w| w[0] >= w[1]));
            assert!(rolls.iter().all(|&r| (1..=6).contains(&r)));
        }
    }

    #[test]
    fn test_roll_respects_face_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rolls = roll(500, 12, &mut rng);
        assert!(rolls.iter().all(|&r| (1..=12).contains(&r)));
        assert!(rolls.iter().any(|&r| r > 6));
    }

    #[test]
    fn test_reroll_lowest_replaces_only_lowest() {
        let mut dice = ScriptedDice::new(&[6]);
        let rerolled = reroll_lowest(&[5, 3, 1], 6, &mut dice);
        assert_eq!(rerolled, vec![6, 5, 3]);
    }

    #[test]
    fn test_reroll_lowest_empty_is_unchanged() {
        let mut dice = ScriptedDice::new(&[]);
        assert!(reroll_lowest(&[], 6, &mut dice).is_empty());
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_reroll_lowest_can_get_worse() {
        let mut dice = ScriptedDice::new(&[1]);
        let rerolled = reroll_lowest(&[4, 4], 6, &mut dice);
        assert_eq!(rerolled, vec![4, 1]);
    }
}
