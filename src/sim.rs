//! The trial loop: deal, player turn, dealer turn, wager resolution.

use std::fmt::Write as _;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::dealer::Dealer;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::options::SimOptions;
use crate::player::Player;
use crate::records::{BankrollPoint, RankCount, RoundRecord, SimulationReport, TrialSummary};
use crate::shoe::Shoe;
use crate::strategy::Strategy;

/// Resolves one finished hand against the dealer's hand, returning the
/// amount credited back to the player. The wager itself was debited when
/// the bet was placed, so a lost hand returns 0 and a push returns the
/// stake.
///
/// Check order matters: surrender short-circuits everything, then
/// blackjack and bust resolve before the generic value comparison.
#[must_use]
pub fn resolve_wager(hand: &Hand, dealer: &Hand, blackjack_pays: f64) -> f64 {
    if hand.surrendered() {
        // The bet was already halved at surrender time.
        return hand.bet();
    }
    if hand.is_bust() {
        return 0.0;
    }
    if hand.is_blackjack() && !dealer.is_blackjack() {
        return hand.bet() * (1.0 + blackjack_pays);
    }
    if dealer.is_blackjack() && !hand.is_blackjack() {
        return 0.0;
    }
    if dealer.is_bust() {
        return hand.bet() * 2.0;
    }
    let player_value = hand.best_value();
    let dealer_value = dealer.best_value();
    if player_value > dealer_value {
        hand.bet() * 2.0
    } else if player_value < dealer_value {
        0.0
    } else {
        hand.bet()
    }
}

/// Encodes a round's card layout and outcome as a human-readable string.
fn encode_layout(hands: &[Hand], dealer: &Hand) -> String {
    let mut out = String::new();
    for hand in hands {
        describe_hand(&mut out, hand);
        out.push_str(" | ");
    }
    out.push_str("dealer ");
    describe_hand(&mut out, dealer);
    out
}

fn describe_hand(out: &mut String, hand: &Hand) {
    for card in hand.cards() {
        let _ = write!(out, "{card} ");
    }
    let _ = write!(out, "({})", hand.best_value());
    if hand.surrendered() {
        out.push_str(" surrendered");
    } else if hand.is_bust() {
        out.push_str(" bust");
    } else if hand.is_blackjack() {
        out.push_str(" blackjack");
    }
}

/// Runs repeated trials of blackjack rounds against a fixed strategy,
/// recording bankroll trajectories and outcomes.
///
/// The whole run draws from a single random stream. A seeded run is
/// reproducible bit-for-bit in card order; the stream carries forward
/// across trials rather than resetting per trial.
pub struct Simulator<'a> {
    options: SimOptions,
    strategy: &'a dyn Strategy,
}

impl<'a> Simulator<'a> {
    /// Creates a simulator over the given configuration and oracle.
    #[must_use]
    pub const fn new(options: SimOptions, strategy: &'a dyn Strategy) -> Self {
        Self { options, strategy }
    }

    /// Returns the configuration this simulator runs with.
    #[must_use]
    pub const fn options(&self) -> &SimOptions {
        &self.options
    }

    /// Runs every trial to completion and returns the accumulated records.
    ///
    /// A trial ends when the hand cap is reached or the bankroll cannot
    /// cover the next wager; the latter is normal termination, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the rules specify a zero-deck shoe.
    pub fn run(&self) -> Result<SimulationReport, ShoeError> {
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let mut report = SimulationReport::default();
        for trial in 1..=self.options.trials {
            self.run_trial(trial, &mut rng, &mut report)?;
        }
        Ok(report)
    }

    fn run_trial(
        &self,
        trial: u32,
        rng: &mut ChaCha8Rng,
        report: &mut SimulationReport,
    ) -> Result<(), ShoeError> {
        let rules = &self.options.rules;
        let mut shoe = Shoe::new(rules.decks, rules.penetration, rng);
        let mut player = Player::new(self.options.bankroll);
        let dealer = Dealer::new(rules.hit_soft_17);

        let mut hands_played: u32 = 0;
        let mut round: u32 = 0;

        while hands_played < self.options.hands_per_trial && player.bankroll() >= self.options.bet
        {
            if shoe.penetration_reached() {
                shoe.shuffle(rng);
            }
            round += 1;
            let opening = player.bankroll();

            // Deal: player, dealer, player, dealer. The dealer's first
            // card is the up-card the oracle sees.
            let mut hand = player.place_bet(self.options.bet);
            let mut dealer_hand = Hand::new(0.0);
            hand.add_card(shoe.draw(rng)?);
            dealer_hand.add_card(shoe.draw(rng)?);
            hand.add_card(shoe.draw(rng)?);
            dealer_hand.add_card(shoe.draw(rng)?);
            let dealer_up = dealer_hand.cards()[0].rank;

            let hands = player.play(hand, dealer_up, &mut shoe, rng, rules, self.strategy)?;

            // The dealer's result is unused against hands that are all
            // bust or surrendered, so skip the draw entirely.
            if hands.iter().any(|h| !h.is_bust() && !h.surrendered()) {
                dealer.play(&mut dealer_hand, &mut shoe, rng)?;
            }

            for hand in &hands {
                player.credit(resolve_wager(hand, &dealer_hand, rules.blackjack_pays));
            }

            hands_played += hands.len() as u32;
            report.bankroll.push(BankrollPoint {
                trial,
                hand: hands_played,
                bankroll: player.bankroll(),
            });
            report.rounds.push(RoundRecord {
                trial,
                round,
                rules: rules.clone(),
                hands_in_round: hands.len() as u32,
                wager: self.options.bet,
                opening_bankroll: opening,
                closing_bankroll: player.bankroll(),
                layout: encode_layout(&hands, &dealer_hand),
            });
        }

        report.summaries.push(TrialSummary {
            trial,
            hands_played,
            bankroll: player.bankroll(),
        });
        let counts = shoe.drawn_counts();
        for rank in Rank::ALL {
            report.card_counts.push(RankCount {
                trial,
                rank,
                count: counts[rank.index()],
            });
        }

        Ok(())
    }
}
