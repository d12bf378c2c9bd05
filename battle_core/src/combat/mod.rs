//! Combat resolution - Apply the dice ruleset to two armies

mod resolution;
mod result;

pub use resolution::{
    attacker_dice_count, defender_dice_count, resolve_battle, resolve_battle_with_rng,
    resolve_round, resolve_round_with_rng, ResolveMode, MAX_ATTACKER_DICE, MAX_DEFENDER_DICE,
};
pub use result::{BattleResult, RoundResult};
