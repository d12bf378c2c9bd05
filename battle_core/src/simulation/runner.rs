//! Batch runner - auto-resolve many battles and aggregate the outcomes.

use super::config::SimulationConfig;
use super::report::{BattleTally, SimulationResult};
use crate::combat::{resolve_battle_with_rng, ResolveMode};
use crate::dice::DiceSource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

/// Battles handled by one independently seeded RNG in a parallel run
pub const SIMULATION_CHUNK_SIZE: u32 = 1_000;

fn run_battles<S: DiceSource + ?Sized>(
    config: &SimulationConfig<'_>,
    count: u32,
    rng: &mut S,
) -> BattleTally {
    let mut tally = BattleTally::default();
    for _ in 0..count {
        let mut attacker = config.attacker();
        let mut defender = config.defender();
        let result = resolve_battle_with_rng(
            &mut attacker,
            &mut defender,
            ResolveMode::Auto,
            &config.tuning,
            rng,
        );
        tally.record(&result);
    }
    tally
}

/// Run every battle sequentially on one entropy source.
///
/// The source is never reset between battles, so trials are linked only
/// through the advancing random stream.
pub fn run_simulation<S: DiceSource + ?Sized>(
    config: &SimulationConfig<'_>,
    rng: &mut S,
) -> SimulationResult {
    let result = run_battles(config, config.num_battles, rng)
        .finish(config.attacker_units, config.defender_units);
    info!(
        battles = result.num_battles,
        attacker_win_pct = result.attacker_win_pct,
        avg_rounds = result.avg_rounds,
        "simulation finished"
    );
    result
}

/// Run the batch across rayon workers.
///
/// The batch is split into chunks of `SIMULATION_CHUNK_SIZE` battles and
/// chunk `i` draws from its own `ChaCha8Rng` seeded with `seed + i`. The
/// result depends only on the config and seed, never on thread count.
pub fn run_simulation_parallel(config: &SimulationConfig<'_>, seed: u64) -> SimulationResult {
    let chunks = config.num_battles.div_ceil(SIMULATION_CHUNK_SIZE);

    let tally = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * SIMULATION_CHUNK_SIZE;
            let count = SIMULATION_CHUNK_SIZE.min(config.num_battles - start);
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(chunk as u64));
            run_battles(config, count, &mut rng)
        })
        .reduce(BattleTally::default, BattleTally::merge);

    let result = tally.finish(config.attacker_units, config.defender_units);
    info!(
        battles = result.num_battles,
        chunks,
        seed,
        attacker_win_pct = result.attacker_win_pct,
        "parallel simulation finished"
    );
    result
}
