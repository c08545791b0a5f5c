//! The player: bankroll custody and the hand decision loop.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::options::Rules;
use crate::shoe::Shoe;
use crate::strategy::{Action, LegalActions, Strategy};

/// Cap on the number of hands produced by repeatedly splitting aces.
const MAX_ACE_SPLIT_HANDS: u8 = 4;

/// A bettor with a bankroll.
///
/// The player is the single writer of its bankroll: wagers leave through
/// [`Player::place_bet`] and the decision loop (doubles, splits), and
/// payouts return through [`Player::credit`]. Nothing else touches funds,
/// so the balance can never drift.
#[derive(Debug, Clone)]
pub struct Player {
    bankroll: f64,
}

impl Player {
    /// Creates a player with the given starting bankroll.
    #[must_use]
    pub const fn new(bankroll: f64) -> Self {
        Self { bankroll }
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Debits the wager and opens a hand for it. Callers must check the
    /// bankroll covers the amount; the trial loop ends a trial instead of
    /// placing a bet it cannot afford.
    #[must_use]
    pub const fn place_bet(&mut self, amount: f64) -> Hand {
        self.bankroll -= amount;
        Hand::new(amount)
    }

    /// Credits a resolved payout back to the bankroll.
    pub const fn credit(&mut self, amount: f64) {
        self.bankroll += amount;
    }

    /// Plays the dealt hand to completion against the oracle, returning
    /// every finished hand (more than one after splits).
    ///
    /// Hands pending play sit in an explicit work queue; splitting pushes
    /// the new hand onto the back, so hands finish in the order they were
    /// created.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe was configured with zero
    /// decks.
    pub fn play(
        &mut self,
        initial: Hand,
        dealer_up: Rank,
        shoe: &mut Shoe,
        rng: &mut ChaCha8Rng,
        rules: &Rules,
        strategy: &dyn Strategy,
    ) -> Result<Vec<Hand>, ShoeError> {
        let mut pending = VecDeque::new();
        pending.push_back(initial);
        let mut finished = Vec::new();
        let mut ace_split_hands: u8 = 0;

        while let Some(mut hand) = pending.pop_front() {
            self.play_hand(
                &mut hand,
                &mut pending,
                &mut ace_split_hands,
                dealer_up,
                shoe,
                rng,
                rules,
                strategy,
            )?;
            finished.push(hand);
        }

        Ok(finished)
    }

    /// Whether doubling is legal for this hand under the table rules.
    /// Split aces never double; other split hands double only under DAS.
    fn can_double(hand: &Hand, rules: &Rules) -> bool {
        hand.len() == 2
            && !hand.is_split_aces()
            && (!hand.is_split() || rules.double_after_split)
    }

    /// Whether an ace pair may be split (again). Fresh ace pairs always
    /// may; a hand already split from aces needs the resplit rule and room
    /// under the hand cap.
    fn ace_split_allowed(hand: &Hand, ace_split_hands: u8, rules: &Rules) -> bool {
        !hand.is_split_aces() || (rules.resplit_aces && ace_split_hands < MAX_ACE_SPLIT_HANDS)
    }

    #[expect(clippy::too_many_arguments, reason = "the round's full table state")]
    fn play_hand(
        &mut self,
        hand: &mut Hand,
        pending: &mut VecDeque<Hand>,
        ace_split_hands: &mut u8,
        dealer_up: Rank,
        shoe: &mut Shoe,
        rng: &mut ChaCha8Rng,
        rules: &Rules,
        strategy: &dyn Strategy,
    ) -> Result<(), ShoeError> {
        // Surrender window: once, on a fresh un-split two-card hand.
        if rules.surrender && !hand.is_split() {
            let legal = LegalActions {
                can_double: Self::can_double(hand, rules),
                can_split: hand.can_split(),
                can_surrender: true,
            };
            if strategy.decide(hand, dealer_up, legal) == Action::Surrender {
                hand.surrender();
                return Ok(());
            }
        }

        loop {
            if hand.is_blackjack() || hand.is_bust() {
                return Ok(());
            }

            // Split aces receive exactly one card and stop, unless this
            // pair is eligible for a further resplit.
            if hand.is_split_aces()
                && hand.len() == 2
                && !(hand.can_split() && Self::ace_split_allowed(hand, *ace_split_hands, rules))
            {
                return Ok(());
            }

            let legal = LegalActions {
                can_double: Self::can_double(hand, rules),
                can_split: hand.can_split(),
                can_surrender: false,
            };

            match strategy.decide(hand, dealer_up, legal) {
                Action::Stand => return Ok(()),
                Action::Double if Self::can_double(hand, rules) && self.bankroll >= hand.bet() => {
                    self.bankroll -= hand.bet();
                    hand.double_bet();
                    hand.add_card(shoe.draw(rng)?);
                    return Ok(());
                }
                Action::Split
                    if hand.can_split()
                        && self.bankroll >= hand.bet()
                        && Self::ace_split_allowed(hand, *ace_split_hands, rules) =>
                {
                    if let Some(second) = hand.take_split_card() {
                        let is_ace = hand.first_rank().is_some_and(Rank::is_ace);
                        let already_counted = hand.is_split_aces();

                        self.bankroll -= hand.bet();
                        hand.mark_split(is_ace);
                        let mut new_hand = Hand::from_split(second, hand.bet(), is_ace);

                        hand.add_card(shoe.draw(rng)?);
                        new_hand.add_card(shoe.draw(rng)?);
                        pending.push_back(new_hand);

                        if is_ace {
                            *ace_split_hands += if already_counted { 1 } else { 2 };
                        }
                    } else {
                        hand.add_card(shoe.draw(rng)?);
                    }
                }
                // Hit, plus any recommendation the current context
                // disallows (double past two cards or against the DAS
                // rule, split without a pair, surrender mid-hand,
                // insufficient funds).
                _ => hand.add_card(shoe.draw(rng)?),
            }
        }
    }
}
