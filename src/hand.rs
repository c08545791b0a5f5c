//! Hand representation and value arithmetic.

use std::collections::BTreeSet;

use crate::card::{Card, Rank};

/// One wager's worth of cards, together with its bet and split/surrender
/// state.
///
/// Value arithmetic treats every ace as contributing either 1 or 11;
/// [`Hand::values`] enumerates every attainable total and
/// [`Hand::best_value`] picks the highest non-busting one.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: f64,
    is_split: bool,
    is_split_aces: bool,
    surrendered: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: f64) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            is_split: false,
            is_split_aces: false,
            surrendered: false,
        }
    }

    /// Creates a hand from a split, holding the single card moved out of
    /// the original hand. `split_aces` marks a hand split from an ace pair,
    /// which is subject to the one-card rule.
    #[must_use]
    pub fn from_split(card: Card, bet: f64, split_aces: bool) -> Self {
        Self {
            cards: vec![card],
            bet,
            is_split: true,
            is_split_aces: split_aces,
            surrendered: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the current bet riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Doubles the bet (the double-down wager increase).
    pub const fn double_bet(&mut self) {
        self.bet *= 2.0;
    }

    /// Halves the bet and marks the hand surrendered. No further cards are
    /// drawn for a surrendered hand; resolution returns the remaining bet.
    pub const fn surrender(&mut self) {
        self.bet /= 2.0;
        self.surrendered = true;
    }

    /// Returns whether this hand resulted from a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.is_split
    }

    /// Returns whether this hand was split from a pair of aces.
    #[must_use]
    pub const fn is_split_aces(&self) -> bool {
        self.is_split_aces
    }

    /// Returns whether this hand was surrendered.
    #[must_use]
    pub const fn surrendered(&self) -> bool {
        self.surrendered
    }

    /// Marks this hand as the surviving half of a split.
    pub(crate) const fn mark_split(&mut self, split_aces: bool) {
        self.is_split = true;
        self.is_split_aces = split_aces;
    }

    /// Removes and returns the second card for splitting. Returns `None`
    /// unless the hand holds exactly two cards.
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Every attainable total given flexible ace valuation, deduplicated
    /// and sorted ascending.
    ///
    /// Each ace doubles the candidate set (counting as 1 or 11); non-ace
    /// cards shift every candidate by their value. A hand with no aces
    /// yields a single total; an empty hand yields `[0]`.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        let mut totals: BTreeSet<u32> = BTreeSet::new();
        totals.insert(0);
        for card in &self.cards {
            totals = if card.rank.is_ace() {
                totals.iter().flat_map(|&t| [t + 1, t + 11]).collect()
            } else {
                totals.iter().map(|&t| t + card.rank.value()).collect()
            };
        }
        totals.into_iter().collect()
    }

    /// The largest attainable total that does not bust, or the minimum
    /// total (every ace counted as 1) when all totals bust.
    #[must_use]
    pub fn best_value(&self) -> u32 {
        let values = self.values();
        values
            .iter()
            .rev()
            .find(|&&v| v <= 21)
            .copied()
            .unwrap_or(values[0])
    }

    /// Returns whether the hand is a blackjack: exactly two cards totaling
    /// 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.best_value() == 21
    }

    /// Returns whether every attainable total busts.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.values()[0] > 21
    }

    /// Returns whether the hand is soft: the best value differs from some
    /// other achievable total that is still 21 or under.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let best = self.best_value();
        self.values().iter().any(|&v| v <= 21 && v != best)
    }

    /// Returns whether the hand may be split: exactly two cards of equal
    /// rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// The rank of the first card, if any. For a splittable pair this is
    /// the pair's rank.
    #[must_use]
    pub fn first_rank(&self) -> Option<Rank> {
        self.cards.first().map(|c| c.rank)
    }
}
