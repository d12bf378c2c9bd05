//! battle-cli - resolve, simulate and price Risk-style dice battles
//!
//! Usage:
//!   battle-cli battle -a 10 -d 5 --hero admiral --structure fortress
//!   battle-cli simulate -a 12 -d 8 --battles 20000 --parallel --seed 7
//!   battle-cli exact 10 5 --json

mod error;
mod report;
mod request;

use battle_core::combat::{resolve_battle_with_rng, resolve_round_with_rng, ResolveMode};
use battle_core::simulation::{run_simulation, run_simulation_parallel, SimulationConfig};
use battle_core::{default_catalog, default_limits, InputLimits};
use clap::{Parser, Subcommand};
use error::CliError;
use report::{
    render_catalog, to_json, ArmySummary, BattleReport, ExactReport, RoundReport,
    SimulationReport,
};
use request::BattleArgs;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Risk-style dice combat from the command line
#[derive(Parser, Debug)]
#[command(name = "battle-cli", version)]
#[command(about = "Resolve, simulate and compute exact odds for dice battles")]
struct Cli {
    /// Emit pretty JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fight a single round
    Round(BattleArgs),

    /// Fight a battle to the end
    Battle {
        #[command(flatten)]
        args: BattleArgs,

        /// Stop after one round
        #[arg(long)]
        manual: bool,
    },

    /// Run a Monte Carlo batch
    Simulate {
        #[command(flatten)]
        args: BattleArgs,

        /// Number of battles (100 to 50000)
        #[arg(long, allow_negative_numbers = true)]
        battles: Option<i64>,

        /// Spread the batch over all cores with per-chunk seeds
        #[arg(long)]
        parallel: bool,
    },

    /// Exact vanilla win probability
    Exact {
        #[arg(allow_negative_numbers = true)]
        attacker: i64,
        #[arg(allow_negative_numbers = true)]
        defender: i64,
    },

    /// List heroes, structures and planet upgrade modes
    Catalog,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let limits = default_limits();
    let output = run(cli.command, cli.json, &limits)?;
    if let Some(text) = output {
        println!("{}", text);
    }
    Ok(())
}

/// Execute one subcommand, returning what should go to stdout
fn run(command: Command, json: bool, limits: &InputLimits) -> Result<Option<String>, CliError> {
    let catalog = default_catalog();

    match command {
        Command::Round(args) => {
            let tuning = args.tuning.build(limits)?;
            let mut attacker = args.attacker_army(catalog, limits.min_army_units);
            let mut defender = args.defender_army(catalog, limits);
            let (attacker_start, defender_start) =
                (ArmySummary::of(&attacker), ArmySummary::of(&defender));

            let mut rng = args.rng();
            let round = resolve_round_with_rng(&mut attacker, &mut defender, &tuning, &mut rng);
            let report = RoundReport {
                attacker: attacker_start,
                defender: defender_start,
                tuning: &tuning,
                round: &round,
            };
            render(json, &report, RoundReport::render_text).map(Some)
        }
        Command::Battle { args, manual } => {
            let tuning = args.tuning.build(limits)?;
            let mut attacker = args.attacker_army(catalog, limits.min_army_units);
            let mut defender = args.defender_army(catalog, limits);
            let (attacker_start, defender_start) =
                (ArmySummary::of(&attacker), ArmySummary::of(&defender));
            let mode = if manual {
                ResolveMode::SingleRound
            } else {
                ResolveMode::Auto
            };

            let mut rng = args.rng();
            let result =
                resolve_battle_with_rng(&mut attacker, &mut defender, mode, &tuning, &mut rng);
            let report = BattleReport {
                attacker: attacker_start,
                defender: defender_start,
                tuning: &tuning,
                result: &result,
                finished: !attacker.can_attack() || defender.is_eliminated(),
            };
            render(json, &report, BattleReport::render_text).map(Some)
        }
        Command::Simulate {
            args,
            battles,
            parallel,
        } => {
            let tuning = args.tuning.build(limits)?;
            let attacker = args.attacker_army(catalog, limits.min_simulation_attacker_units);
            let defender = args.defender_army(catalog, limits);
            let config = SimulationConfig {
                attacker_units: attacker.units,
                defender_units: defender.units,
                attacker_hero: attacker.hero.clone(),
                defender_structures: defender.structures.clone(),
                tuning: tuning.clone(),
                num_battles: limits.battles(battles),
            };
            info!(
                attacker = config.attacker_units,
                defender = config.defender_units,
                battles = config.num_battles,
                parallel,
                "starting simulation"
            );

            let (result, seed) = if parallel {
                let seed = args.seed.unwrap_or_else(rand::random);
                (run_simulation_parallel(&config, seed), Some(seed))
            } else {
                let mut rng = args.rng();
                (run_simulation(&config, &mut rng), None)
            };
            let report = SimulationReport {
                attacker: ArmySummary::of(&attacker),
                defender: ArmySummary::of(&defender),
                tuning: &tuning,
                seed,
                result: &result,
            };
            if json {
                return to_json(&report).map(Some);
            }
            print!("{}", report.render_header());
            result.print();
            Ok(None)
        }
        Command::Exact { attacker, defender } => {
            let (attacker, defender) = limits.exact_units(attacker, defender);
            let report = ExactReport::new(attacker, defender)?;
            render(json, &report, ExactReport::render_text).map(Some)
        }
        Command::Catalog => {
            if json {
                to_json(catalog).map(Some)
            } else {
                Ok(Some(render_catalog(catalog)))
            }
        }
    }
}

fn render<T: serde::Serialize>(
    json: bool,
    report: &T,
    text: impl Fn(&T) -> String,
) -> Result<String, CliError> {
    if json {
        to_json(report)
    } else {
        Ok(text(report))
    }
}
