//! Hero dice - one attack die upgraded to the hero's die size

use super::{sort_descending, DiceSource};
use crate::types::{Hero, STANDARD_DIE};

/// Die size a hero contributes, or a plain d6 without one
pub fn die_size(hero: Option<&Hero>) -> u32 {
    hero.map_or(STANDARD_DIE, |h| h.die_size)
}

/// Roll attack dice where the hero replaces exactly one d6
///
/// The hero die is drawn first, then `count - 1` standard dice.
pub fn roll_with_hero<S: DiceSource + ?Sized>(
    count: u32,
    hero: Option<&Hero>,
    rng: &mut S,
) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }

    let mut rolls = Vec::with_capacity(count as usize);
    rolls.push(rng.randint(1, die_size(hero)));
    rolls.extend((1..count).map(|_| rng.randint(1, STANDARD_DIE)));
    sort_descending(&mut rolls);
    rolls
}
