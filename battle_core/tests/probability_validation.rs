//! Integration test: dice engine vs exact probability tables
//!
//! Monte Carlo frequencies from the live resolver must land on the exact
//! single-roll fractions and the dynamic-programming battle odds.

use battle_core::combat::{resolve_battle_with_rng, resolve_round_with_rng, ResolveMode};
use battle_core::dice::DiceSource;
use battle_core::probability::{single_roll_table, win_probability_exact, SINGLE_ROLL_PROBABILITIES};
use battle_core::simulation::{run_simulation_parallel, SimulationConfig};
use battle_core::{default_catalog, Army, CombatTuning, Hero, Side};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, VecDeque};

const TOLERANCE: f64 = 0.02;

/// Plays back a fixed list of faces
struct Script(VecDeque<u32>);

impl Script {
    fn new(faces: &[u32]) -> Self {
        Script(faces.iter().copied().collect())
    }
}

impl DiceSource for Script {
    fn randint(&mut self, low: u32, high: u32) -> u32 {
        let face = self.0.pop_front().expect("script exhausted");
        assert!((low..=high).contains(&face));
        face
    }
}

#[test]
fn single_roll_frequencies_match_table() {
    let tuning = CombatTuning::vanilla();
    let trials = 50_000;
    let mut rng = ChaCha8Rng::seed_from_u64(12_345);

    for table in &SINGLE_ROLL_PROBABILITIES {
        let mut counts: HashMap<(u32, u32), u32> = HashMap::new();
        for _ in 0..trials {
            let mut attacker = Army::new(table.attacker_dice + 1);
            let mut defender = Army::new(table.defender_dice);
            let round = resolve_round_with_rng(&mut attacker, &mut defender, &tuning, &mut rng);
            assert_eq!(round.attacker_rolls.len() as u32, table.attacker_dice);
            assert_eq!(round.defender_rolls.len() as u32, table.defender_dice);
            *counts
                .entry((round.attacker_losses, round.defender_losses))
                .or_default() += 1;
        }

        for outcome in table.outcomes {
            let observed = counts
                .get(&(outcome.attacker_losses, outcome.defender_losses))
                .copied()
                .unwrap_or(0) as f64
                / trials as f64;
            assert!(
                (observed - outcome.probability()).abs() < TOLERANCE,
                "{} outcome ({}, {}): observed {:.4}, expected {:.4}",
                table.label(),
                outcome.attacker_losses,
                outcome.defender_losses,
                observed,
                outcome.probability()
            );
        }
        assert_eq!(
            counts.len(),
            table.outcomes.len(),
            "{} produced an outcome missing from the table",
            table.label()
        );
    }
}

#[test]
fn ten_vs_five_matches_exact_odds() {
    let config = SimulationConfig::vanilla(10, 5, 50_000);
    let result = run_simulation_parallel(&config, 7);
    let exact = win_probability_exact(10, 5);
    assert!(
        (result.attacker_win_rate() - exact).abs() < TOLERANCE,
        "simulated {:.4} vs exact {:.4}",
        result.attacker_win_rate(),
        exact
    );
}

#[test]
fn ten_vs_ten_matches_exact_odds() {
    let config = SimulationConfig::vanilla(10, 10, 20_000);
    let result = run_simulation_parallel(&config, 99);
    let exact = win_probability_exact(10, 10);
    assert!(exact < 0.5);
    assert!((result.attacker_win_rate() - exact).abs() < TOLERANCE);
}

#[test]
fn sequential_battles_match_exact_odds() {
    let tuning = CombatTuning::vanilla();
    let mut rng = ChaCha8Rng::seed_from_u64(404);
    let trials = 20_000;
    let mut wins = 0;
    for _ in 0..trials {
        let mut attacker = Army::new(4);
        let mut defender = Army::new(3);
        let result = resolve_battle_with_rng(
            &mut attacker,
            &mut defender,
            ResolveMode::Auto,
            &tuning,
            &mut rng,
        );
        if result.winner == Side::Attacker {
            wins += 1;
        }
    }
    let observed = wins as f64 / trials as f64;
    assert!((observed - win_probability_exact(4, 3)).abs() < TOLERANCE);
}

#[test]
fn all_ties_go_to_defender() {
    let tuning = CombatTuning::vanilla();
    let mut attacker = Army::new(4);
    let mut defender = Army::new(2);
    let mut dice = Script::new(&[3, 3, 3, 3, 3]);

    let round = resolve_round_with_rng(&mut attacker, &mut defender, &tuning, &mut dice);

    assert_eq!(round.attacker_rolls, vec![3, 3, 3]);
    assert_eq!(round.defender_rolls, vec![3, 3]);
    assert_eq!(round.attacker_losses, 2);
    assert_eq!(round.defender_losses, 0);
    assert_eq!(attacker.units, 2);
    assert_eq!(defender.units, 2);
}

#[test]
fn fortress_absorbs_one_loss() {
    let catalog = default_catalog();
    let tuning = CombatTuning::vanilla();
    let mut attacker = Army::new(4);
    let mut defender = Army::new(2).with_structures(catalog.structures_for(["fortress"]));
    let mut dice = Script::new(&[6, 6, 6, 1, 1]);

    let round = resolve_round_with_rng(&mut attacker, &mut defender, &tuning, &mut dice);

    assert_eq!(round.defender_losses, 1);
    assert_eq!(defender.units, 1);
    assert!(round.notes.iter().any(|n| n.contains("absorb")));
}

#[test]
fn orbital_battery_adds_a_defender_die() {
    let catalog = default_catalog();
    let tuning = CombatTuning::vanilla();
    let mut attacker = Army::new(4);
    let mut defender = Army::new(1).with_structures(catalog.structures_for(["orbital_battery"]));
    let mut dice = Script::new(&[2, 2, 2, 6, 6]);

    let round = resolve_round_with_rng(&mut attacker, &mut defender, &tuning, &mut dice);

    assert_eq!(round.defender_rolls.len(), 2);
    assert_eq!(round.attacker_losses, 2);
    assert_eq!(defender.units, 1);
}

#[test]
fn hero_die_beats_a_six() {
    let tuning = CombatTuning::vanilla();
    let mut attacker = Army::new(4).with_hero(Hero::new("admiral", 12));
    let mut defender = Army::new(2);
    let mut dice = Script::new(&[12, 1, 1, 6, 6]);

    let round = resolve_round_with_rng(&mut attacker, &mut defender, &tuning, &mut dice);

    assert_eq!(round.attacker_rolls, vec![12, 1, 1]);
    assert_eq!(round.attacker_losses, 1);
    assert_eq!(round.defender_losses, 1);
}

#[test]
fn exact_table_has_every_reachable_pairing() {
    for attacker_dice in 1..=3 {
        for defender_dice in 1..=2 {
            assert!(single_roll_table(attacker_dice, defender_dice).is_ok());
        }
    }
    assert!(single_roll_table(3, 3).is_err());
}
