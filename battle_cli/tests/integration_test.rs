//! Integration test: Catalog -> Armies -> Battle -> Simulate -> Exact odds
//!
//! This test walks the same path the CLI takes, from raw inputs through the
//! limits and catalog to every engine entry point.

use battle_core::combat::{resolve_battle_with_rng, ResolveMode};
use battle_core::config::parse_tuning;
use battle_core::probability::{win_probability_exact, ExactOdds};
use battle_core::simulation::{run_simulation, run_simulation_parallel, SimulationConfig};
use battle_core::{default_catalog, default_limits, Army, CombatTuning, PlanetUpgradeMode, Side};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

#[test]
fn test_full_battle_flow() {
    let catalog = default_catalog();
    let limits = default_limits();

    separator("STEP 1: Build armies from the catalog");
    let hero = catalog.hero("admiral").expect("admiral in catalog");
    let structures = catalog.structures_for(["fortress", "orbital_battery", "moat"]);
    assert_eq!(structures.len(), 2);

    let attacker = Army::new(limits.army_units(15)).with_hero(hero.clone());
    let defender = Army::new(limits.army_units(6)).with_structures(structures.clone());
    println!("  Attacker: {} units led by {}", attacker.units, hero);
    println!("  Defender: {} units", defender.units);

    separator("STEP 2: Clamp a tuning preset");
    let preset = parse_tuning(
        r#"
hero_upgrade_level = 5
planet_upgrade_level = 2
planet_upgrade_mode = "reroll_lowest_defender"
"#,
    )
    .expect("preset parses");
    let tuning = limits.clamp_tuning(&preset);
    assert_eq!(tuning.hero_upgrade_level, 3);
    assert_eq!(tuning.planet_upgrade_mode, PlanetUpgradeMode::RerollLowestDefender);
    assert_eq!(tuning.defender_rerolls_per_round(), 2);

    separator("STEP 3: Fight to the end");
    let mut rng = ChaCha8Rng::seed_from_u64(2026);
    let (mut atk, mut def) = (attacker.clone(), defender.clone());
    let result = resolve_battle_with_rng(&mut atk, &mut def, ResolveMode::Auto, &tuning, &mut rng);
    for (i, round) in result.rounds.iter().enumerate() {
        println!("  Round {}: {}", i + 1, round.summary());
    }
    println!("  {}", result.summary());

    assert!(!result.rounds.is_empty());
    assert!(result.defender_remaining == 0 || result.attacker_remaining <= 1);
    assert_eq!(result.attacker_won(), result.winner == Side::Attacker);
    assert_eq!(attacker.units - result.attacker_losses(), result.attacker_remaining);
    assert!(result.rounds[0].notes.iter().any(|n| n.contains("admiral")));
    assert!(result.rounds.iter().all(|r| r.defender_rolls.len() <= 3));

    separator("STEP 4: Manual step");
    let (mut atk, mut def) = (attacker.clone(), defender.clone());
    let step = resolve_battle_with_rng(&mut atk, &mut def, ResolveMode::SingleRound, &tuning, &mut rng);
    assert_eq!(step.round_count(), 1);
    assert_eq!(atk.units, step.attacker_remaining);

    separator("STEP 5: Simulate");
    let config = SimulationConfig {
        attacker_units: attacker.units,
        defender_units: defender.units,
        attacker_hero: attacker.hero.clone(),
        defender_structures: structures,
        tuning: tuning.clone(),
        num_battles: limits.battles(Some(2_000)),
    };
    let sequential = run_simulation(&config, &mut rng);
    sequential.print();
    let parallel = run_simulation_parallel(&config, 11);
    assert_eq!(sequential.num_battles, 2_000);
    assert_eq!(parallel.attacker_wins + parallel.defender_wins, 2_000);
    assert_eq!(parallel, run_simulation_parallel(&config, 11));

    separator("STEP 6: Exact vanilla odds");
    let (a, d) = limits.exact_units(15, 6);
    let odds = ExactOdds::compute(a, d).expect("reachable pairing");
    println!(
        "  {}v{}: attacker {:.2}% / defender {:.2}%",
        a, d, odds.attacker_win_probability, odds.defender_win_probability
    );
    assert_eq!(odds.current_roll_type, "3v2");
    assert!((odds.attacker_win_probability + odds.defender_win_probability - 100.0).abs() < 0.011);

    let vanilla = SimulationConfig::vanilla(a, d, 20_000);
    let simulated = run_simulation_parallel(&vanilla, 5);
    assert!((simulated.attacker_win_rate() - win_probability_exact(a, d)).abs() < 0.02);
}

#[test]
fn test_vanilla_tuning_roundtrip_through_limits() {
    let limits = default_limits();
    let tuning = limits.clamp_tuning(&CombatTuning::vanilla());
    assert!(tuning.is_vanilla());
    assert_eq!(tuning, CombatTuning::vanilla());
}
