//! Structure effects - defender bonus dice and loss absorption
//!
//! Structures are armour, not evasion: the attacker still rolls normally,
//! but a fortified defender can absorb losses or field more dice.

use crate::types::{Structure, StructureEffect};

/// Count structures providing the given effect
pub fn count_effect(structures: &[&Structure], effect: StructureEffect) -> u32 {
    structures.iter().filter(|s| s.effect == effect).count() as u32
}

/// Whether any structure provides the given effect
pub fn has_effect(structures: &[&Structure], effect: StructureEffect) -> bool {
    structures.iter().any(|s| s.effect == effect)
}

/// Defender losses negated per round
pub fn damage_absorbed(structures: &[&Structure]) -> u32 {
    count_effect(structures, StructureEffect::Absorb)
}

/// Extra dice granted to the defender per round
pub fn extra_defender_dice(structures: &[&Structure]) -> u32 {
    count_effect(structures, StructureEffect::ExtraDefenderDie)
}

/// Absorb up to `absorb` of the raw defender losses
///
/// Returns `(remaining_losses, absorbed)`.
pub fn apply_absorption(raw_losses: u32, absorb: u32) -> (u32, u32) {
    let absorbed = raw_losses.min(absorb);
    (raw_losses - absorbed, absorbed)
}
