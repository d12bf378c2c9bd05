//! Report rendering - human text or pretty JSON for every subcommand

use crate::error::CliError;
use battle_core::probability::{single_roll_table, ExactOdds};
use battle_core::{
    Army, BattleResult, Catalog, CombatTuning, Hero, RoundResult, SimulationResult,
    StructureEffect,
};
use serde::Serialize;
use std::fmt::Write;

/// Pretty-printed JSON for any report
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Starting state of one side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmySummary {
    pub units: u32,
    pub hero: Option<Hero>,
    pub structures: Vec<String>,
}

impl ArmySummary {
    pub fn of(army: &Army<'_>) -> Self {
        ArmySummary {
            units: army.units,
            hero: army.hero.clone(),
            structures: army.structures.iter().map(|s| s.name.clone()).collect(),
        }
    }

    fn describe(&self) -> String {
        let mut text = format!("{} units", self.units);
        if let Some(hero) = &self.hero {
            let _ = write!(text, ", led by {}", hero);
        }
        if !self.structures.is_empty() {
            let _ = write!(text, ", behind {}", self.structures.join(", "));
        }
        text
    }
}

#[derive(Debug, Serialize)]
pub struct RoundReport<'a> {
    pub attacker: ArmySummary,
    pub defender: ArmySummary,
    pub tuning: &'a CombatTuning,
    pub round: &'a RoundResult,
}

impl RoundReport<'_> {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Attacker: {}", self.attacker.describe());
        let _ = writeln!(out, "Defender: {}", self.defender.describe());
        let _ = writeln!(out);
        push_round(&mut out, 1, self.round);
        out
    }
}

#[derive(Debug, Serialize)]
pub struct BattleReport<'a> {
    pub attacker: ArmySummary,
    pub defender: ArmySummary,
    pub tuning: &'a CombatTuning,
    pub result: &'a BattleResult,
    /// False when a manual step left both sides able to keep fighting
    pub finished: bool,
}

impl BattleReport<'_> {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Attacker: {}", self.attacker.describe());
        let _ = writeln!(out, "Defender: {}", self.defender.describe());
        let _ = writeln!(out);

        for (i, round) in self.result.rounds.iter().enumerate() {
            push_round(&mut out, i + 1, round);
        }
        if self.result.rounds.is_empty() {
            let _ = writeln!(out, "No rounds fought: the attacker needs more than one unit.");
        }

        let _ = writeln!(out);
        if self.finished {
            let _ = writeln!(out, "Result: {}", self.result.summary());
        } else {
            let _ = writeln!(
                out,
                "Battle continues: {} attacker, {} defender remaining",
                self.result.attacker_remaining, self.result.defender_remaining
            );
        }
        let _ = writeln!(
            out,
            "Losses: attacker {}, defender {}",
            self.result.attacker_losses(),
            self.result.defender_losses()
        );
        out
    }
}

fn push_round(out: &mut String, number: usize, round: &RoundResult) {
    let _ = writeln!(out, "Round {}: {}", number, round.summary());
    for note in &round.notes {
        let _ = writeln!(out, "  - {}", note);
    }
}

#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    pub attacker: ArmySummary,
    pub defender: ArmySummary,
    pub tuning: &'a CombatTuning,
    /// Seed of a parallel run
    pub seed: Option<u64>,
    pub result: &'a SimulationResult,
}

impl SimulationReport<'_> {
    /// Header lines; the table itself comes from `SimulationResult::print`
    pub fn render_header(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Attacker: {}", self.attacker.describe());
        let _ = writeln!(out, "Defender: {}", self.defender.describe());
        if let Some(seed) = self.seed {
            let _ = writeln!(out, "Parallel run, seed {}", seed);
        }
        out
    }
}

/// One line of the opening-roll breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRow {
    pub attacker_losses: u32,
    pub defender_losses: u32,
    pub fraction: String,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct ExactReport {
    pub odds: ExactOdds,
    pub opening_roll: Vec<OutcomeRow>,
}

impl ExactReport {
    pub fn new(attacker_units: u32, defender_units: u32) -> Result<Self, CliError> {
        let odds = ExactOdds::compute(attacker_units, defender_units)?;
        let atk_dice = attacker_units.saturating_sub(1).min(battle_core::combat::MAX_ATTACKER_DICE);
        let def_dice = defender_units.min(battle_core::combat::MAX_DEFENDER_DICE);
        let table = single_roll_table(atk_dice, def_dice)?;
        let opening_roll = table
            .outcomes
            .iter()
            .map(|o| OutcomeRow {
                attacker_losses: o.attacker_losses,
                defender_losses: o.defender_losses,
                fraction: format!("{}/{}", o.numerator, o.denominator),
                probability: o.probability(),
            })
            .collect();
        Ok(ExactReport { odds, opening_roll })
    }

    pub fn render_text(&self) -> String {
        let odds = &self.odds;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} attackers vs {} defenders (vanilla rules)",
            odds.attacker_units, odds.defender_units
        );
        let _ = writeln!(out, "Attacker wins: {:.2}%", odds.attacker_win_probability);
        let _ = writeln!(out, "Defender wins: {:.2}%", odds.defender_win_probability);
        let _ = writeln!(out);
        let _ = writeln!(out, "Opening roll ({}):", odds.current_roll_type);
        for row in &self.opening_roll {
            let _ = writeln!(
                out,
                "  attacker -{}, defender -{}: {} ({:.2}%)",
                row.attacker_losses,
                row.defender_losses,
                row.fraction,
                row.probability * 100.0
            );
        }
        let _ = writeln!(
            out,
            "Expected losses per roll: attacker {:.4}, defender {:.4}",
            odds.expected_attacker_losses_per_roll, odds.expected_defender_losses_per_roll
        );
        out
    }
}

fn effect_label(effect: StructureEffect) -> &'static str {
    match effect {
        StructureEffect::Absorb => "absorbs one defender loss per round",
        StructureEffect::ExtraDefenderDie => "adds one defender die per round",
    }
}

/// Text listing of heroes, structures and planet modes
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Heroes:");
    for (key, die_size) in &catalog.heroes {
        let _ = writeln!(out, "  {:<18} d{}", key, die_size);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Structures:");
    for (key, structure) in &catalog.structures {
        let _ = writeln!(
            out,
            "  {:<18} {} ({})",
            key,
            structure.name,
            effect_label(structure.effect)
        );
        if !structure.description.is_empty() {
            let _ = writeln!(out, "  {:<18} {}", "", structure.description);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Planet upgrade modes:");
    for mode in battle_core::PlanetUpgradeMode::all() {
        let _ = writeln!(out, "  {:<26} {}", mode.as_str(), mode.help());
    }
    out
}
