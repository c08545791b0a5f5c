//! Records emitted for the persistence layer.
//!
//! The engine produces these shapes and knows nothing about how they are
//! stored; a persistence collaborator consumes the [`SimulationReport`]
//! after a run.

use serde::Serialize;

use crate::card::Rank;
use crate::options::Rules;

/// Bankroll checkpoint taken after each round within a trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BankrollPoint {
    /// Trial number, 1-based.
    pub trial: u32,
    /// Cumulative hands played in the trial at this checkpoint.
    pub hand: u32,
    /// Bankroll after the round's payouts.
    pub bankroll: f64,
}

/// Closing summary for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialSummary {
    /// Trial number, 1-based.
    pub trial: u32,
    /// Hands actually played; less than the cap when the bankroll ran out.
    pub hands_played: u32,
    /// Closing bankroll.
    pub bankroll: f64,
}

/// Count of cards of one rank drawn from the shoe, snapshotted at the end
/// of a trial. Counts reset on every shuffle, explicit or implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankCount {
    /// Trial number, 1-based.
    pub trial: u32,
    /// The rank counted.
    pub rank: Rank,
    /// Cards of this rank drawn since the shoe's last shuffle.
    pub count: u64,
}

/// Structured outcome of one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRecord {
    /// Trial number, 1-based.
    pub trial: u32,
    /// Round number within the trial, 1-based.
    pub round: u32,
    /// Rules in force when the round was played.
    pub rules: Rules,
    /// Number of player hands resolved (more than one after splits).
    pub hands_in_round: u32,
    /// The flat wager the round opened with.
    pub wager: f64,
    /// Bankroll before the round's wager was placed.
    pub opening_bankroll: f64,
    /// Bankroll after the round's payouts.
    pub closing_bankroll: f64,
    /// Human-readable card layout and outcome, e.g.
    /// `"Ah Ks (21) blackjack | dealer 9d 7c (16)"`.
    pub layout: String,
}

/// Everything one run produces, in the shape the persistence layer
/// consumes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationReport {
    /// Per-round bankroll checkpoints across all trials.
    pub bankroll: Vec<BankrollPoint>,
    /// One summary per trial.
    pub summaries: Vec<TrialSummary>,
    /// Per-rank drawn-card counts, thirteen rows per trial.
    pub card_counts: Vec<RankCount>,
    /// One record per round played.
    pub rounds: Vec<RoundRecord>,
}
