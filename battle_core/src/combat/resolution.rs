//! Round and battle resolution - apply the Risk ruleset to two armies

use super::result::{BattleResult, RoundResult};
use crate::dice::{reroll_lowest, roll_d6, roll_with_hero, sort_descending, DiceSource};
use crate::structures::{apply_absorption, damage_absorbed, extra_defender_dice};
use crate::tuning::CombatTuning;
use crate::types::{Army, Side, Structure, STANDARD_DIE};
use tracing::{debug, trace};

/// Most dice an attacker may commit in one round
pub const MAX_ATTACKER_DICE: u32 = 3;

/// Most dice a defender fields before structure bonuses
pub const MAX_DEFENDER_DICE: u32 = 2;

/// How far a battle should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Fight until one side can no longer continue
    #[default]
    Auto,
    /// Resolve at most one round and hand control back to the caller
    SingleRound,
}

/// Attacker dice for a given unit count; one unit always stays behind
pub fn attacker_dice_count(units: u32) -> u32 {
    units.saturating_sub(1).min(MAX_ATTACKER_DICE)
}

/// Defender dice for a given unit count, including structure bonus dice
pub fn defender_dice_count(units: u32, structures: &[&Structure]) -> u32 {
    units.min(MAX_DEFENDER_DICE) + extra_defender_dice(structures)
}

/// Resolve one round using the thread RNG
pub fn resolve_round(
    attacker: &mut Army<'_>,
    defender: &mut Army<'_>,
    tuning: &CombatTuning,
) -> RoundResult {
    let mut rng = rand::thread_rng();
    resolve_round_with_rng(attacker, defender, tuning, &mut rng)
}

/// Resolve one round of combat with a provided entropy source
///
/// Both armies are updated in place. The steps are:
/// 1. Size the dice pools (attacker keeps one unit back, structures add
///    defender dice)
/// 2. Roll attacker dice (hero upgrades one) then defender dice
/// 3. Apply defender rerolls, then attacker suppression
/// 4. Compare pairs highest-first; ties go to the defender
/// 5. Let structures absorb defender losses
/// 6. Subtract losses and record notes for every active modifier
pub fn resolve_round_with_rng<S: DiceSource + ?Sized>(
    attacker: &mut Army<'_>,
    defender: &mut Army<'_>,
    tuning: &CombatTuning,
    rng: &mut S,
) -> RoundResult {
    let mut notes = Vec::new();

    // Step 1: dice counts
    let atk_dice = attacker_dice_count(attacker.units);
    let bonus_dice = extra_defender_dice(&defender.structures);
    let def_dice = defender_dice_count(defender.units, &defender.structures);
    if bonus_dice > 0 {
        notes.push(format!(
            "Structures grant +{} defender {}",
            bonus_dice,
            if bonus_dice > 1 { "dice" } else { "die" }
        ));
    }

    // Step 2: roll, hero applies to the attacker only
    let mut atk_rolls = roll_with_hero(atk_dice, attacker.hero.as_ref(), rng);
    let mut def_rolls = roll_d6(def_dice, rng);

    if let Some(hero) = attacker.hero.as_ref().filter(|h| h.die_size > STANDARD_DIE) {
        notes.push(format!(
            "{} upgrades one attack die to d{}",
            hero.name, hero.die_size
        ));
    }

    // Step 3: mode-specific effects, rerolls before suppression
    let rerolls = tuning.defender_rerolls_per_round();
    if rerolls > 0 {
        for attempt in 0..rerolls {
            let original_lowest = def_rolls.last().copied().unwrap_or(0);
            let rerolled = reroll_lowest(&def_rolls, STANDARD_DIE, rng);
            let improved = rerolled.last().is_some_and(|&low| low > original_lowest);
            trace!(attempt, ?rerolled, improved, "defender reroll");
            if improved {
                def_rolls = rerolled;
            }
        }
        notes.push(format!(
            "Planet upgrade rerolls defender's lowest die {} time{}",
            rerolls,
            if rerolls > 1 { "s" } else { "" }
        ));
    }

    let penalty = tuning.attacker_highest_die_penalty();
    if penalty > 0 {
        if let Some(highest) = atk_rolls.first_mut() {
            *highest = highest.saturating_sub(penalty).max(1);
            sort_descending(&mut atk_rolls);
            trace!(penalty, ?atk_rolls, "attacker highest die suppressed");
            notes.push(format!(
                "Planet upgrade suppresses highest attacker die by {}",
                penalty
            ));
        }
    }

    let hero_upgrade_bonus = tuning.hero_upgrade_bonus();
    let planet_upgrade_bonus = tuning.planet_upgrade_bonus();
    if hero_upgrade_bonus > 0 {
        notes.push(format!("Hero upgrades add +{} attacker ability", hero_upgrade_bonus));
    }
    if planet_upgrade_bonus > 0 {
        notes.push(format!("Planet upgrades add +{} defender ability", planet_upgrade_bonus));
    }
    if tuning.has_special_planet_mode() {
        notes.push(format!("Planet upgrade mode: {}", tuning.planet_upgrade_mode));
    }
    if tuning.attacker_ability != 0 {
        notes.push(format!("Attacker base ability modifier: {:+}", tuning.attacker_ability));
    }
    if tuning.defender_ability != 0 {
        notes.push(format!("Defender base ability modifier: {:+}", tuning.defender_ability));
    }

    // Step 4: compare pairs, defender wins ties
    let atk_bonus = tuning.attacker_total_bonus();
    let def_bonus = tuning.defender_total_bonus();
    let mut atk_losses = 0;
    let mut raw_def_losses = 0;
    for (&a, &d) in atk_rolls.iter().zip(def_rolls.iter()) {
        if a as i32 + atk_bonus > d as i32 + def_bonus {
            raw_def_losses += 1;
        } else {
            atk_losses += 1;
        }
    }

    // Step 5: structures absorb defender losses
    let (def_losses, absorbed) =
        apply_absorption(raw_def_losses, damage_absorbed(&defender.structures));
    if absorbed > 0 {
        notes.push(format!(
            "Structures absorb {} defender loss{}",
            absorbed,
            if absorbed > 1 { "es" } else { "" }
        ));
    }

    // Step 6: apply losses
    attacker.take_losses(atk_losses);
    defender.take_losses(def_losses);

    debug!(
        ?atk_rolls,
        ?def_rolls,
        atk_losses,
        def_losses,
        absorbed,
        attacker_remaining = attacker.units,
        defender_remaining = defender.units,
        "round resolved"
    );

    RoundResult {
        attacker_rolls: atk_rolls,
        defender_rolls: def_rolls,
        attacker_losses: atk_losses,
        defender_losses: def_losses,
        attacker_remaining: attacker.units,
        defender_remaining: defender.units,
        notes,
    }
}

/// Resolve a battle using the thread RNG
pub fn resolve_battle(
    attacker: &mut Army<'_>,
    defender: &mut Army<'_>,
    mode: ResolveMode,
    tuning: &CombatTuning,
) -> BattleResult {
    let mut rng = rand::thread_rng();
    resolve_battle_with_rng(attacker, defender, mode, tuning, &mut rng)
}

/// Resolve a battle with a provided entropy source
///
/// Rounds continue while the attacker can field an attack (more than one
/// unit) and the defender has units left. In `SingleRound` mode at most one
/// round is fought. The winner is the attacker only once the defender has
/// been wiped out.
pub fn resolve_battle_with_rng<S: DiceSource + ?Sized>(
    attacker: &mut Army<'_>,
    defender: &mut Army<'_>,
    mode: ResolveMode,
    tuning: &CombatTuning,
    rng: &mut S,
) -> BattleResult {
    let mut rounds = Vec::new();

    while attacker.can_attack() && !defender.is_eliminated() {
        rounds.push(resolve_round_with_rng(attacker, defender, tuning, rng));
        if mode == ResolveMode::SingleRound {
            break;
        }
    }

    let winner = if defender.is_eliminated() {
        Side::Attacker
    } else {
        Side::Defender
    };

    BattleResult {
        rounds,
        attacker_remaining: attacker.units,
        defender_remaining: defender.units,
        attacker_retreated: false,
        winner,
    }
}
