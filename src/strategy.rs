//! The decision oracle: action types and the strategy trait.

use std::collections::HashMap;

use crate::card::Rank;
use crate::hand::Hand;

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card and decide again.
    Hit,
    /// Finalize the hand as it stands.
    Stand,
    /// Double the wager, draw exactly one card, and finalize.
    Double,
    /// Divide a pair into two independent hands.
    Split,
    /// Forfeit half the wager and end the hand.
    Surrender,
}

/// Which actions are legal at the moment the oracle is consulted.
///
/// The engine computes these before every consultation; a strategy whose
/// underlying data recommends a disallowed action is downgraded to
/// [`Action::Hit`] by the engine, never reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegalActions {
    /// Doubling down is legal here.
    pub can_double: bool,
    /// Splitting is legal here.
    pub can_split: bool,
    /// Surrendering is legal here.
    pub can_surrender: bool,
}

/// A pure decision oracle mapping hand state to a recommended action.
///
/// `decide` receives the full current hand, not just the first two cards,
/// so a decision after a hit sees the new total. Implementations must be
/// stateless and total: identical inputs always yield identical outputs
/// (required for seeded reproducibility), and some action is always
/// returned, defaulting to [`Action::Stand`] when data is missing.
pub trait Strategy {
    /// Recommends one action for the given hand against the dealer's
    /// visible up-card.
    fn decide(&self, hand: &Hand, dealer_up: Rank, legal: LegalActions) -> Action;
}

/// A table-driven strategy keyed by hand description and dealer up-card.
///
/// Keys are derived from the current hand:
///
/// - `P{rank}_{up}` for a splittable pair, e.g. `P8_6`, `PA_10`;
/// - `S{total}_{up}` for a soft hand, e.g. `S18_9`;
/// - `H{total}_{up}` for a hard hand, e.g. `H12_2`.
///
/// Lookups that miss return [`Action::Stand`]. Loading a table from disk
/// is the business of an external loader; the engine only consumes the
/// map.
#[derive(Debug, Clone, Default)]
pub struct TableStrategy {
    table: HashMap<String, Action>,
}

impl TableStrategy {
    /// Creates a strategy over the given decision table.
    #[must_use]
    pub const fn new(table: HashMap<String, Action>) -> Self {
        Self { table }
    }

    /// Builds the lookup key for a hand against a dealer up-card.
    #[must_use]
    pub fn key(hand: &Hand, dealer_up: Rank) -> String {
        if hand.can_split() {
            // can_split guarantees a first card exists.
            let rank = hand.first_rank().unwrap_or(Rank::Ace);
            format!("P{rank}_{dealer_up}")
        } else if hand.is_soft() {
            format!("S{}_{dealer_up}", hand.best_value())
        } else {
            format!("H{}_{dealer_up}", hand.best_value())
        }
    }
}

impl Strategy for TableStrategy {
    fn decide(&self, hand: &Hand, dealer_up: Rank, _legal: LegalActions) -> Action {
        self.table
            .get(&Self::key(hand, dealer_up))
            .copied()
            .unwrap_or(Action::Stand)
    }
}
